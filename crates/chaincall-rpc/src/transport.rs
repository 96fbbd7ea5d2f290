//! The `RpcTransport` trait and the `eth_call` helpers built on it.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::request::{JsonRpcRequest, JsonRpcResponse};

/// Anything that can carry a JSON-RPC request to a node.
///
/// Object-safe, so callers can hold a `Box<dyn RpcTransport>`.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Send a single JSON-RPC request and return the parsed response.
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError>;

    /// The endpoint this transport talks to.
    fn url(&self) -> &str;
}

/// Extract the hex `result` of an `eth_call` response.
///
/// # Errors
/// `Rpc` if the node returned an error object (e.g. a revert),
/// `UnexpectedResult` if `result` is missing or not a string.
pub fn call_result(resp: JsonRpcResponse) -> Result<String, TransportError> {
    match resp.into_result().map_err(TransportError::Rpc)? {
        Value::String(hex) => Ok(hex),
        Value::Null => Err(TransportError::UnexpectedResult("missing result".into())),
        other => Err(TransportError::UnexpectedResult(format!(
            "expected hex string, got {other}"
        ))),
    }
}

/// Send an `eth_call` request and return the raw result hex, unchanged.
pub async fn eth_call<T: RpcTransport + ?Sized>(
    transport: &T,
    req: JsonRpcRequest,
) -> Result<String, TransportError> {
    tracing::debug!(url = transport.url(), method = %req.method, id = %req.id, "sending request");
    let resp = transport.send(req).await?;
    call_result(resp)
}
