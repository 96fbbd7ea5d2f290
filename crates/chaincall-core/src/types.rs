//! The closed ABI type system ChainCall understands.
//!
//! Every type token is resolved into a [`TypeDescriptor`] once, at parse
//! time. Encoding and decoding then dispatch with an exhaustive `match`
//! over the variants; there is no runtime type discovery.

use alloy_primitives::{Address, I256, U256};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AbiError;

/// One supported elementary ABI type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    /// `uintN`, width in bits (8..=256, multiple of 8)
    Uint(u16),
    /// `intN`, width in bits (8..=256, multiple of 8)
    Int(u16),
    Address,
    Bool,
    /// `bytesN`, length in bytes (1..=32)
    FixedBytes(u8),
    /// Dynamic `bytes`
    Bytes,
    String,
}

impl TypeDescriptor {
    /// Dynamic types live in the tail and are referenced by offset.
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Bytes | Self::String)
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Int(_))
    }
}

fn parse_int_width(digits: &str) -> Option<u16> {
    if digits.is_empty() {
        return Some(256);
    }
    if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let bits: u16 = digits.parse().ok()?;
    (bits >= 8 && bits <= 256 && bits % 8 == 0).then_some(bits)
}

fn parse_bytes_len(digits: &str) -> Option<u8> {
    if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let len: u8 = digits.parse().ok()?;
    (1..=32).contains(&len).then_some(len)
}

impl FromStr for TypeDescriptor {
    type Err = AbiError;

    /// Parse a single trimmed type token. Aliases `uint`/`int` resolve to
    /// their 256-bit forms.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let unsupported = || AbiError::UnsupportedType {
            ty: token.to_string(),
        };

        let ty = match token {
            "address" => Self::Address,
            "bool" => Self::Bool,
            "string" => Self::String,
            "bytes" => Self::Bytes,
            t => {
                if let Some(rest) = t.strip_prefix("uint") {
                    Self::Uint(parse_int_width(rest).ok_or_else(unsupported)?)
                } else if let Some(rest) = t.strip_prefix("int") {
                    Self::Int(parse_int_width(rest).ok_or_else(unsupported)?)
                } else if let Some(rest) = t.strip_prefix("bytes") {
                    Self::FixedBytes(parse_bytes_len(rest).ok_or_else(unsupported)?)
                } else {
                    return Err(unsupported());
                }
            }
        };
        Ok(ty)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uint(bits) => write!(f, "uint{bits}"),
            Self::Int(bits) => write!(f, "int{bits}"),
            Self::Address => write!(f, "address"),
            Self::Bool => write!(f, "bool"),
            Self::FixedBytes(n) => write!(f, "bytes{n}"),
            Self::Bytes => write!(f, "bytes"),
            Self::String => write!(f, "string"),
        }
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A typed value, either converted from a literal argument or decoded from
/// return data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    Uint(U256),
    Int(I256),
    Address(Address),
    Bool(bool),
    /// Raw content of a `bytesN` or `bytes` value (unpadded)
    Bytes(Vec<u8>),
    String(String),
}

/// A value paired with the type it was decoded against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedValue {
    pub ty: TypeDescriptor,
    pub value: AbiValue,
}

impl DecodedValue {
    pub fn new(ty: TypeDescriptor, value: AbiValue) -> Self {
        Self { ty, value }
    }
}
