//! Error types for the ChainCall encode/decode pipeline.
//!
//! Every variant is terminal for the current call: the engine never retries
//! and never returns partial results.

use thiserror::Error;

/// Errors raised while parsing signatures, encoding arguments or decoding
/// return data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    #[error("Malformed signature '{signature}': {reason}")]
    MalformedSignature { signature: String, reason: String },

    #[error("Unsupported type: {ty}")]
    UnsupportedType { ty: String },

    #[error("Argument {index} ('{value}'): {reason}")]
    ArgumentEncoding {
        index: usize,
        value: String,
        reason: String,
    },

    #[error("Argument count mismatch: signature has {expected}, got {got}")]
    ArgumentCount { expected: usize, got: usize },

    #[error("Malformed return type: '{token}'")]
    MalformedReturnType { token: String },

    #[error("Malformed return data: {reason}")]
    MalformedReturnData { reason: String },

    #[error("Return value at offset {offset} is not a valid {ty}")]
    ReturnValueOutOfRange { offset: usize, ty: String },

    #[error("Truncated return data: need {needed} bytes at offset {offset}, have {available}")]
    TruncatedReturnData {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

impl AbiError {
    pub(crate) fn malformed_signature(signature: &str, reason: impl Into<String>) -> Self {
        Self::MalformedSignature {
            signature: signature.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn argument(index: usize, value: &str, reason: impl Into<String>) -> Self {
        Self::ArgumentEncoding {
            index,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Index of the offending parameter, for argument errors.
    pub fn argument_index(&self) -> Option<usize> {
        match self {
            Self::ArgumentEncoding { index, .. } => Some(*index),
            _ => None,
        }
    }
}
