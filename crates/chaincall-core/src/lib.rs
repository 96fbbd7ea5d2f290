//! # chaincall-core
//!
//! The ABI engine behind ChainCall: turns a human-written view-function call
//! into EVM calldata and turns the node's reply back into readable values.
//!
//! ## Pipeline
//! - `signature`  → `name(type,...)` / `(type,...)` into typed descriptors
//! - `selector`   → keccak256(canonical signature)[..4]
//! - `encoder`    → literal arguments into `selector ++ abi_encode(args)`
//! - `decoder`    → return bytes into typed values
//! - `formatter`  → typed values into `"<type>: <value>"` strings
//!
//! Everything here is synchronous and stateless; encoders and decoders can
//! be used from any number of threads at once.

pub mod call;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod formatter;
pub mod selector;
pub mod signature;
pub mod trace;
pub mod types;

pub use call::EncodedCall;
pub use decoder::{decode_params, parse_return_hex, ReturnDecoder};
pub use encoder::{convert_argument, encode_params, CallEncoder};
pub use error::AbiError;
pub use formatter::{format_value, format_values, render_value, FormattedValue};
pub use selector::Selector;
pub use signature::{FunctionSignature, ReturnSchema};
pub use trace::{LogTrace, TraceEvent, TraceHook};
pub use types::{AbiValue, DecodedValue, TypeDescriptor};

/// Encode a call from its textual signature and literal arguments.
///
/// ```ignore
/// let call = chaincall_core::encode_call("getTransaction(uint256)", &["3"])?;
/// assert_eq!(call.selector_hex(), "4f0f4aa9");
/// ```
pub fn encode_call<S: AsRef<str>>(signature: &str, args: &[S]) -> Result<EncodedCall, AbiError> {
    CallEncoder::new().encode_str(signature, args)
}

/// Decode `eth_call` return hex against a `(type,...)` list and render it.
pub fn decode_return(return_types: &str, raw_hex: &str) -> Result<Vec<FormattedValue>, AbiError> {
    let values = ReturnDecoder::new().decode_str(return_types, raw_hex)?;
    Ok(format_values(&values))
}
