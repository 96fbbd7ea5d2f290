//! chaincall-rpc: the JSON-RPC side of ChainCall.
//!
//! - [`JsonRpcRequest`] / [`JsonRpcResponse`]: wire types
//! - [`eth`]: the `eth_call` envelope and its curl rendering
//! - [`RpcTransport`]: async transport trait, with [`HttpTransport`] over `reqwest`
//! - [`TransportError`]: structured error type

pub mod error;
pub mod eth;
pub mod http;
pub mod request;
pub mod transport;

pub use error::TransportError;
pub use eth::{curl_command, eth_call_request, CallObject, DEFAULT_BLOCK, DEFAULT_REQUEST_ID};
pub use http::{HttpClientConfig, HttpTransport};
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId, RpcParam};
pub use transport::{call_result, eth_call, RpcTransport};
