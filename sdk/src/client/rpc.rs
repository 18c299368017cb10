//! # JSON-RPC Envelope
//!
//! Request/response framing for the node's JSON-RPC 2.0 endpoint. Method
//! names travel as plain strings (the node's method table is flat and
//! lowercase: `get_balance`, `broadcast_transaction`, ...); parameters are
//! an opaque JSON value shaped per method.
//!
//! A response with a present, non-null `error` member is a protocol-level
//! failure regardless of HTTP status — both are checked.

use serde::{Deserialize, Serialize};

use crate::config::JSONRPC_VERSION;

/// A JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version. Always `"2.0"`.
    pub jsonrpc: String,
    /// Request identifier, echoed back by the node. The SDK uses the
    /// current millisecond timestamp — collisions over one connection are
    /// harmless because calls are sequential.
    pub id: u64,
    /// Method name, e.g. `"get_nonce"`.
    pub method: String,
    /// Method-specific parameters.
    #[serde(default)]
    pub params: serde_json::Value,
}

impl RpcRequest {
    /// Build a request envelope for `method` with `params`.
    pub fn new(id: u64, method: &str, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            method: method.to_string(),
            params,
        }
    }
}

/// A JSON-RPC 2.0 response. Exactly one of `result` / `error` should be
/// set by a conforming node; `error` wins when both appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Protocol version echo.
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// The request ID this response answers.
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    /// Successful result payload.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Error object, when the node refused the call.
    #[serde(default)]
    pub error: Option<RpcErrorObject>,
}

/// JSON-RPC 2.0 error object.
///
/// Standard codes: `-32700` parse error, `-32600` invalid request,
/// `-32601` method not found, `-32602` invalid params, `-32603` internal
/// error; `-32000..=-32099` are application-defined. The Qubit node uses
/// `-32004` for "not found" lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorObject {
    /// Numeric error code.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
    /// Optional method-specific detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl RpcErrorObject {
    /// `true` when the node reports the looked-up entity does not exist,
    /// as opposed to the call itself being malformed or failing.
    pub fn is_not_found(&self) -> bool {
        indicates_absence(self.code, &self.message)
    }
}

/// Application error code the node uses for missing entities.
pub const NOT_FOUND_CODE: i64 = -32004;

/// Classify an error `(code, message)` pair as a confirmed miss. Older
/// nodes predate the `-32004` code and only say so in the message.
pub fn indicates_absence(code: i64, message: &str) -> bool {
    code == NOT_FOUND_CODE || message.to_ascii_lowercase().contains("not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_wire_shape() {
        let req = RpcRequest::new(7, "get_balance", serde_json::json!({"address": "aa"}));
        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(wire["jsonrpc"], "2.0");
        assert_eq!(wire["id"], 7);
        assert_eq!(wire["method"], "get_balance");
        assert_eq!(wire["params"]["address"], "aa");
    }

    #[test]
    fn response_with_null_error_is_success() {
        let resp: RpcResponse = serde_json::from_value(serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": 42,
            "error": null,
        }))
        .unwrap();
        assert!(resp.error.is_none());
        assert_eq!(resp.result.unwrap(), 42);
    }

    #[test]
    fn error_object_decodes() {
        let resp: RpcResponse = serde_json::from_value(serde_json::json!({
            "id": 1,
            "error": {"code": -32601, "message": "method not found"},
        }))
        .unwrap();
        let err = resp.error.unwrap();
        assert_eq!(err.code, -32601);
    }

    #[test]
    fn not_found_detection() {
        let by_code = RpcErrorObject {
            code: NOT_FOUND_CODE,
            message: "no such transaction".into(),
            data: None,
        };
        let by_message = RpcErrorObject {
            code: -32000,
            message: "block not found".into(),
            data: None,
        };
        let neither = RpcErrorObject {
            code: -32603,
            message: "internal error".into(),
            data: None,
        };
        assert!(by_code.is_not_found());
        assert!(by_message.is_not_found());
        assert!(!neither.is_not_found());
    }
}
