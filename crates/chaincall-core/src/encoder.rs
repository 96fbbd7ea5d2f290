//! ABI encoder: literal arguments to EVM calldata.
//!
//! Encoding runs in two steps:
//! 1. each literal string is converted into an [`AbiValue`] according to the
//!    declared [`TypeDescriptor`] (`convert_argument`);
//! 2. the typed values are packed as an ABI tuple: static values fill one
//!    32-byte head slot each, dynamic values put an offset in the head and
//!    their length-prefixed, right-padded content in the tail.
//!
//! Offsets are relative to the start of the argument block, i.e. the byte
//! right after the 4-byte selector.
//!
//! # Usage
//! ```ignore
//! let call = CallEncoder::new().encode_str("balanceOf(address)", &["0xd8dA..."])?;
//! println!("{}", call.data_hex());
//! ```

use alloy_primitives::{Address, I256, U256};

use crate::call::EncodedCall;
use crate::error::AbiError;
use crate::formatter::render_value;
use crate::selector::Selector;
use crate::signature::FunctionSignature;
use crate::trace::{TraceEvent, TraceHook};
use crate::types::{AbiValue, TypeDescriptor};

const WORD: usize = 32;

type Word = [u8; WORD];

/// Encoder for view-function calls.
///
/// Stateless apart from an optional trace hook; cheap to construct per call.
#[derive(Default, Clone, Copy)]
pub struct CallEncoder<'a> {
    trace: Option<&'a dyn TraceHook>,
}

impl<'a> CallEncoder<'a> {
    pub fn new() -> Self {
        Self { trace: None }
    }

    /// Report intermediate steps (selector, converted arguments) to `hook`.
    pub fn with_trace(mut self, hook: &'a dyn TraceHook) -> Self {
        self.trace = Some(hook);
        self
    }

    fn emit(&self, event: TraceEvent<'_>) {
        if let Some(hook) = self.trace {
            hook.on_event(&event);
        }
    }

    /// Parse `signature` and encode `args` against it.
    pub fn encode_str<S: AsRef<str>>(
        &self,
        signature: &str,
        args: &[S],
    ) -> Result<EncodedCall, AbiError> {
        let sig = FunctionSignature::parse(signature)?;
        self.encode(&sig, args)
    }

    /// Encode a call: `selector ++ abi_encode(args...)`.
    ///
    /// # Errors
    /// `ArgumentCount` if `args` and the parameter list differ in length,
    /// `ArgumentEncoding` naming the first argument that fails conversion
    /// or does not fit its declared type.
    pub fn encode<S: AsRef<str>>(
        &self,
        sig: &FunctionSignature,
        args: &[S],
    ) -> Result<EncodedCall, AbiError> {
        if args.len() != sig.params.len() {
            return Err(AbiError::ArgumentCount {
                expected: sig.params.len(),
                got: args.len(),
            });
        }

        let canonical = sig.canonical();
        let selector = Selector::from_signature(&canonical);
        self.emit(TraceEvent::SelectorComputed {
            signature: &canonical,
            selector,
        });

        let mut typed = Vec::with_capacity(args.len());
        for (index, (ty, literal)) in sig.params.iter().zip(args).enumerate() {
            let literal = literal.as_ref();
            let value = convert_argument(index, ty, literal)?;
            self.emit(TraceEvent::ArgumentConverted {
                index,
                ty: *ty,
                literal,
            });
            typed.push((*ty, value));
        }

        let packed = pack(&typed)
            .map_err(|e| AbiError::argument(e.index, args[e.index].as_ref(), e.reason))?;

        let mut data = Vec::with_capacity(4 + packed.len());
        data.extend_from_slice(selector.as_bytes());
        data.extend_from_slice(&packed);

        self.emit(TraceEvent::CallEncoded {
            signature: &canonical,
            len: data.len(),
        });

        Ok(EncodedCall {
            signature: canonical,
            selector,
            data,
        })
    }
}

/// Convert one literal argument into a typed value.
///
/// Integers are parsed as base-10 regardless of width (the packer checks
/// the width); `address` and `bytes*` accept hex with or without `0x`;
/// `bool` accepts `true`/`false` in any case; `string` is taken verbatim.
pub fn convert_argument(
    index: usize,
    ty: &TypeDescriptor,
    literal: &str,
) -> Result<AbiValue, AbiError> {
    let fail = |reason: String| AbiError::argument(index, literal, reason);

    let value = match ty {
        TypeDescriptor::Uint(_) => {
            let (negative, magnitude) = parse_decimal(literal).map_err(fail)?;
            if negative && !magnitude.is_zero() {
                return Err(fail(format!("negative value for {ty}")));
            }
            AbiValue::Uint(magnitude)
        }
        TypeDescriptor::Int(_) => {
            let (negative, magnitude) = parse_decimal(literal).map_err(fail)?;
            AbiValue::Int(to_signed(negative, magnitude).map_err(fail)?)
        }
        TypeDescriptor::Address => {
            let bytes = parse_hex(literal).map_err(fail)?;
            if bytes.len() != 20 {
                return Err(fail(format!(
                    "address must be 20 bytes, got {}",
                    bytes.len()
                )));
            }
            AbiValue::Address(Address::from_slice(&bytes))
        }
        TypeDescriptor::Bool => {
            let token = literal.trim();
            if token.eq_ignore_ascii_case("true") {
                AbiValue::Bool(true)
            } else if token.eq_ignore_ascii_case("false") {
                AbiValue::Bool(false)
            } else {
                return Err(fail("expected 'true' or 'false'".into()));
            }
        }
        TypeDescriptor::FixedBytes(_) | TypeDescriptor::Bytes => {
            AbiValue::Bytes(parse_hex(literal).map_err(fail)?)
        }
        TypeDescriptor::String => AbiValue::String(literal.to_string()),
    };
    Ok(value)
}

/// Pack already-typed values as an ABI parameter tuple (no selector).
///
/// # Errors
/// `ArgumentEncoding` if a value does not fit its type, e.g. `300` as `uint8`.
pub fn encode_params(values: &[(TypeDescriptor, AbiValue)]) -> Result<Vec<u8>, AbiError> {
    pack(values).map_err(|e| AbiError::argument(e.index, &render_value(&values[e.index].1), e.reason))
}

// ─── Conversion helpers ──────────────────────────────────────────────────────

fn parse_decimal(literal: &str) -> Result<(bool, U256), String> {
    let token = literal.trim();
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("not a base-10 integer".into());
    }
    let magnitude = U256::from_str_radix(digits, 10)
        .map_err(|_| "integer does not fit in 256 bits".to_string())?;
    Ok((negative, magnitude))
}

fn to_signed(negative: bool, magnitude: U256) -> Result<I256, String> {
    let min_magnitude = U256::from(1u8) << 255usize;
    if negative {
        if magnitude > min_magnitude {
            return Err("integer below int256 minimum".into());
        }
        Ok(I256::from_raw(magnitude.wrapping_neg()))
    } else {
        if magnitude >= min_magnitude {
            return Err("integer above int256 maximum".into());
        }
        Ok(I256::from_raw(magnitude))
    }
}

fn parse_hex(literal: &str) -> Result<Vec<u8>, String> {
    let token = literal.trim();
    let body = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    hex::decode(body).map_err(|e| format!("invalid hex: {e}"))
}

// ─── Packing ─────────────────────────────────────────────────────────────────

struct PackError {
    index: usize,
    reason: String,
}

fn pack(values: &[(TypeDescriptor, AbiValue)]) -> Result<Vec<u8>, PackError> {
    let head_len = values.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for (index, (ty, value)) in values.iter().enumerate() {
        let fail = |reason: String| PackError { index, reason };

        if ty.is_dynamic() {
            let content: &[u8] = match (ty, value) {
                (TypeDescriptor::Bytes, AbiValue::Bytes(b)) => b,
                (TypeDescriptor::String, AbiValue::String(s)) => s.as_bytes(),
                _ => return Err(fail(mismatch(ty, value))),
            };
            head.extend_from_slice(&usize_word(head_len + tail.len()));
            tail.extend_from_slice(&usize_word(content.len()));
            tail.extend_from_slice(content);
            tail.resize(tail.len() + padding(content.len()), 0);
        } else {
            head.extend_from_slice(&static_word(ty, value).map_err(fail)?);
        }
        tracing::trace!(index, %ty, head = head.len(), tail = tail.len(), "packed argument");
    }

    head.extend_from_slice(&tail);
    Ok(head)
}

fn static_word(ty: &TypeDescriptor, value: &AbiValue) -> Result<Word, String> {
    let mut word = [0u8; WORD];
    match (ty, value) {
        (TypeDescriptor::Uint(bits), AbiValue::Uint(v)) => {
            if v.bit_len() > usize::from(*bits) {
                return Err(format!("value does not fit in uint{bits}"));
            }
            word = v.to_be_bytes::<WORD>();
        }
        (TypeDescriptor::Int(bits), AbiValue::Int(v)) => {
            if !int_fits(*v, *bits) {
                return Err(format!("value does not fit in int{bits}"));
            }
            word = v.into_raw().to_be_bytes::<WORD>();
        }
        (TypeDescriptor::Address, AbiValue::Address(a)) => {
            word[12..].copy_from_slice(a.as_slice());
        }
        (TypeDescriptor::Bool, AbiValue::Bool(b)) => {
            word[31] = u8::from(*b);
        }
        (TypeDescriptor::FixedBytes(n), AbiValue::Bytes(b)) => {
            if b.len() > usize::from(*n) {
                return Err(format!("bytes{n}: got {} bytes", b.len()));
            }
            word[..b.len()].copy_from_slice(b);
        }
        _ => return Err(mismatch(ty, value)),
    }
    Ok(word)
}

/// Two's-complement range check for `intN`.
pub(crate) fn int_fits(v: I256, bits: u16) -> bool {
    let raw = v.into_raw();
    let magnitude_bits = if v.is_negative() {
        (!raw).bit_len()
    } else {
        raw.bit_len()
    };
    magnitude_bits < usize::from(bits)
}

fn usize_word(n: usize) -> Word {
    U256::from(n).to_be_bytes::<WORD>()
}

fn padding(len: usize) -> usize {
    (WORD - len % WORD) % WORD
}

fn mismatch(ty: &TypeDescriptor, value: &AbiValue) -> String {
    format!("value {} does not match type {ty}", render_value(value))
}
