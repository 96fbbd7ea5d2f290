//! Return-data decoder: the inverse of the argument encoder.
//!
//! Reads a head of 32-byte slots, one per declared type. Static values are
//! read straight from their slot; dynamic values follow the slot's offset to
//! a length word and the content behind it. Every read is bounds-checked so
//! short input fails with `TruncatedReturnData` instead of panicking.

use alloy_primitives::{Address, I256, U256};

use crate::encoder::int_fits;
use crate::error::AbiError;
use crate::signature::ReturnSchema;
use crate::trace::{TraceEvent, TraceHook};
use crate::types::{AbiValue, DecodedValue, TypeDescriptor};

const WORD: usize = 32;

/// Decoder for `eth_call` return data.
#[derive(Default, Clone, Copy)]
pub struct ReturnDecoder<'a> {
    trace: Option<&'a dyn TraceHook>,
}

impl<'a> ReturnDecoder<'a> {
    pub fn new() -> Self {
        Self { trace: None }
    }

    pub fn with_trace(mut self, hook: &'a dyn TraceHook) -> Self {
        self.trace = Some(hook);
        self
    }

    /// Parse `return_types` and decode `raw_hex` against it.
    ///
    /// The type list is validated before any byte is looked at, so a bad
    /// token always surfaces as `MalformedReturnType`.
    pub fn decode_str(
        &self,
        return_types: &str,
        raw_hex: &str,
    ) -> Result<Vec<DecodedValue>, AbiError> {
        let schema = ReturnSchema::parse(return_types)?;
        let data = parse_return_hex(raw_hex)?;
        self.decode(&data, &schema)
    }

    /// Decode raw return bytes into one value per schema entry.
    pub fn decode(
        &self,
        data: &[u8],
        schema: &ReturnSchema,
    ) -> Result<Vec<DecodedValue>, AbiError> {
        let values = decode_params(data, schema)?;
        if let Some(hook) = self.trace {
            hook.on_event(&TraceEvent::ReturnDecoded {
                bytes: data.len(),
                count: values.len(),
            });
        }
        Ok(values)
    }
}

/// Strip an optional `0x` and hex-decode the JSON-RPC `result` field.
pub fn parse_return_hex(raw: &str) -> Result<Vec<u8>, AbiError> {
    let token = raw.trim();
    let body = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    hex::decode(body).map_err(|e| AbiError::MalformedReturnData {
        reason: format!("invalid hex: {e}"),
    })
}

/// Decode an ABI parameter tuple. Bytes past what the schema needs are ignored.
pub fn decode_params(data: &[u8], schema: &ReturnSchema) -> Result<Vec<DecodedValue>, AbiError> {
    let reader = Reader { data };
    schema
        .iter()
        .enumerate()
        .map(|(slot, ty)| {
            let value = reader.value(slot * WORD, ty)?;
            Ok(DecodedValue::new(*ty, value))
        })
        .collect()
}

fn out_of_range(offset: usize, ty: &TypeDescriptor) -> AbiError {
    AbiError::ReturnValueOutOfRange {
        offset,
        ty: ty.to_string(),
    }
}

struct Reader<'a> {
    data: &'a [u8],
}

impl<'a> Reader<'a> {
    fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8], AbiError> {
        let truncated = || AbiError::TruncatedReturnData {
            offset,
            needed: len,
            available: self.data.len(),
        };
        let end = offset.checked_add(len).ok_or_else(truncated)?;
        self.data.get(offset..end).ok_or_else(truncated)
    }

    fn word(&self, offset: usize) -> Result<&'a [u8], AbiError> {
        self.slice(offset, WORD)
    }

    /// Read a word as an offset/length. Values beyond `usize` saturate and
    /// then fail the following bounds check.
    fn usize_at(&self, offset: usize) -> Result<usize, AbiError> {
        let v = U256::from_be_slice(self.word(offset)?);
        Ok(usize::try_from(v).unwrap_or(usize::MAX))
    }

    fn value(&self, head: usize, ty: &TypeDescriptor) -> Result<AbiValue, AbiError> {
        let value = match ty {
            TypeDescriptor::Uint(bits) => {
                let v = U256::from_be_slice(self.word(head)?);
                if v.bit_len() > usize::from(*bits) {
                    return Err(out_of_range(head, ty));
                }
                AbiValue::Uint(v)
            }
            TypeDescriptor::Int(bits) => {
                let v = I256::from_raw(U256::from_be_slice(self.word(head)?));
                if !int_fits(v, *bits) {
                    return Err(out_of_range(head, ty));
                }
                AbiValue::Int(v)
            }
            TypeDescriptor::Address => {
                AbiValue::Address(Address::from_slice(&self.word(head)?[12..]))
            }
            TypeDescriptor::Bool => match U256::from_be_slice(self.word(head)?) {
                v if v.is_zero() => AbiValue::Bool(false),
                v if v == U256::from(1u8) => AbiValue::Bool(true),
                _ => return Err(out_of_range(head, ty)),
            },
            TypeDescriptor::FixedBytes(n) => {
                AbiValue::Bytes(self.word(head)?[..usize::from(*n)].to_vec())
            }
            TypeDescriptor::Bytes => AbiValue::Bytes(self.dynamic(head)?.to_vec()),
            TypeDescriptor::String => {
                AbiValue::String(String::from_utf8_lossy(self.dynamic(head)?).into_owned())
            }
        };
        tracing::trace!(head, %ty, "decoded slot");
        Ok(value)
    }

    fn dynamic(&self, head: usize) -> Result<&'a [u8], AbiError> {
        let offset = self.usize_at(head)?;
        let len = self.usize_at(offset)?;
        let start = offset.checked_add(WORD).ok_or(AbiError::TruncatedReturnData {
            offset,
            needed: WORD,
            available: self.data.len(),
        })?;
        self.slice(start, len)
    }
}
