//! Blocking JSON-RPC transport for a cluster node.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod client;
pub mod error;
pub mod methods;

pub use client::{RpcClient, RpcClientBuilder, decode_response};
pub use error::RpcError;
pub use methods::{AccountInfo, LatestBlockhash, RpcVersion};

pub const JSONRPC_VERSION: &str = "2.0";
pub const REQUEST_ID: u64 = 1;

#[derive(Clone, Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    #[serde(skip_serializing_if = "<[Value]>::is_empty")]
    pub params: &'a [Value],
}

impl<'a> RpcRequest<'a> {
    pub fn new(method: &'a str, params: &'a [Value]) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        }
    }
}

/// Error member of a JSON-RPC response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Map<String, Value>>,
}

/// Response envelope; `result` stays `None` when the node reports an error.
#[derive(Clone, Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub jsonrpc: String,
    pub id: u64,
    pub result: Option<T>,
    pub error: Option<ErrorResponse>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Context {
    pub slot: u64,
}

/// Result shape of methods that report the slot they were evaluated at.
#[derive(Clone, Debug, Deserialize)]
pub struct WithContext<T> {
    pub context: Context,
    pub value: T,
}

#[cfg(test)]
mod tests {
    use super::{RpcRequest, RpcResponse, WithContext};
    use serde_json::json;

    #[test]
    fn request_omits_empty_params() {
        let body = serde_json::to_value(RpcRequest::new("getSlot", &[])).expect("json");
        assert_eq!(body, json!({"jsonrpc": "2.0", "id": 1, "method": "getSlot"}));

        let params = [json!("key"), json!({"commitment": "finalized"})];
        let body = serde_json::to_value(RpcRequest::new("getBalance", &params)).expect("json");
        assert_eq!(
            body,
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getBalance",
                "params": ["key", {"commitment": "finalized"}]
            })
        );
    }

    #[test]
    fn response_envelope_with_error() {
        let response: RpcResponse<u64> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32602, "message": "Invalid params", "data": {"reason": "bad"}}
        }))
        .expect("json");
        assert!(response.result.is_none());
        let error = response.error.expect("error");
        assert_eq!(error.code, -32602);
        assert_eq!(error.data.expect("data")["reason"], "bad");
    }

    #[test]
    fn response_envelope_with_context_result() {
        let response: RpcResponse<WithContext<u64>> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {"context": {"slot": 310}, "value": 5000}
        }))
        .expect("json");
        assert!(response.error.is_none());
        let result = response.result.expect("result");
        assert_eq!(result.context.slot, 310);
        assert_eq!(result.value, 5000);
    }
}
