//! Human-readable rendering of decoded values.

use serde::Serialize;
use std::fmt;

use crate::types::{AbiValue, DecodedValue};

/// One decoded value ready for display: `"<type>: <value>"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedValue {
    #[serde(rename = "type")]
    pub ty: String,
    pub value: String,
}

impl fmt::Display for FormattedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.ty, self.value)
    }
}

/// Render a value on its own.
///
/// Addresses are EIP-55 checksummed with `0x`; byte strings are bare hex;
/// integers are decimal (signed types keep their sign).
pub fn render_value(value: &AbiValue) -> String {
    match value {
        AbiValue::Uint(v) => v.to_string(),
        AbiValue::Int(v) => v.to_string(),
        AbiValue::Address(a) => a.to_checksum(None),
        AbiValue::Bool(b) => b.to_string(),
        AbiValue::Bytes(b) => hex::encode(b),
        AbiValue::String(s) => s.clone(),
    }
}

pub fn format_value(value: &DecodedValue) -> FormattedValue {
    FormattedValue {
        ty: value.ty.to_string(),
        value: render_value(&value.value),
    }
}

pub fn format_values(values: &[DecodedValue]) -> Vec<FormattedValue> {
    values.iter().map(format_value).collect()
}
