//! The `eth_call` envelope.
//!
//! ```text
//! {"jsonrpc":"2.0","method":"eth_call","params":[{"data":..,"to":..},"latest"],"id":1}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::request::JsonRpcRequest;

/// Block tag used when the caller does not pick one.
pub const DEFAULT_BLOCK: &str = "latest";

/// Request id used by the CLI.
pub const DEFAULT_REQUEST_ID: u64 = 1;

/// The call object passed as the first `eth_call` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallObject {
    /// Contract address
    pub to: String,
    /// `0x`-prefixed call data
    pub data: String,
}

impl From<CallObject> for Value {
    /// Keys come out in map order: `data` before `to`.
    fn from(call: CallObject) -> Self {
        let mut map = Map::new();
        map.insert("to".into(), Value::String(call.to));
        map.insert("data".into(), Value::String(call.data));
        Value::Object(map)
    }
}

/// Build an `eth_call` request for `data` against contract `to` at `block`.
pub fn eth_call_request(
    id: u64,
    to: impl Into<String>,
    data: impl Into<String>,
    block: &str,
) -> JsonRpcRequest {
    let call = CallObject {
        to: to.into(),
        data: data.into(),
    };
    JsonRpcRequest::new(id, "eth_call", vec![call.into(), Value::String(block.to_string())])
}

/// Render a request as an equivalent `curl` command line.
pub fn curl_command(url: &str, request: &JsonRpcRequest) -> Result<String, serde_json::Error> {
    Ok(format!(
        "curl -X POST {url} -H \"Content-Type: application/json\" --data '{}'",
        request.to_json()?
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TO: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

    #[test]
    fn envelope_shape() {
        let req = eth_call_request(DEFAULT_REQUEST_ID, TO, "0x18160ddd", DEFAULT_BLOCK);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "jsonrpc": "2.0",
                "method": "eth_call",
                "params": [{"to": TO, "data": "0x18160ddd"}, "latest"],
                "id": 1
            })
        );
    }

    #[test]
    fn call_object_roundtrips_from_params() {
        let req = eth_call_request(1, TO, "0x", DEFAULT_BLOCK);
        let call: CallObject = serde_json::from_value(req.params[0].clone()).unwrap();
        assert_eq!(call.to, TO);
        assert_eq!(call.data, "0x");
    }

    #[test]
    fn call_object_value_matches_serde() {
        let call = CallObject {
            to: TO.into(),
            data: "0x70a08231".into(),
        };
        let via_serde = serde_json::to_value(&call).unwrap();
        assert_eq!(Value::from(call), via_serde);
    }

    #[test]
    fn curl_rendering() {
        let req = eth_call_request(7, TO, "0x18160ddd", "0x10");
        let cmd = curl_command("http://localhost:8545", &req).unwrap();
        assert_eq!(
            cmd,
            format!(
                "curl -X POST http://localhost:8545 -H \"Content-Type: application/json\" \
                 --data '{{\"jsonrpc\":\"2.0\",\"method\":\"eth_call\",\"params\":[{{\"data\":\"0x18160ddd\",\"to\":\"{TO}\"}},\"0x10\"],\"id\":7}}'"
            )
        );
    }
}
