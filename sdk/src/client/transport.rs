//! # RPC Transport
//!
//! The seam between the SDK and the network. [`RpcTransport`] is the
//! capability the client orchestrates against; [`HttpTransport`] is the
//! production implementation (HTTP POST to `{base_url}/rpc`). Tests swap
//! in a scripted mock and never open a socket.
//!
//! Transport discipline: one owned connection pool per transport instance,
//! acquired at construction, dropped with it — never global state. Safe
//! for sequential reuse; concurrent use from multiple clients needs
//! external coordination. One fixed timeout, no retries: a failed call
//! surfaces immediately and the caller owns retry policy.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use crate::config::{RPC_PATH, RPC_TIMEOUT};
use crate::error::SdkError;

use super::rpc::{RpcRequest, RpcResponse};

/// A boundary capable of executing one JSON-RPC call.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Execute `method` with `params`, returning the `result` member.
    ///
    /// A present non-null `error` member maps to [`SdkError::Rpc`];
    /// unreachable/timed-out nodes map to [`SdkError::Transport`].
    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, SdkError>;
}

/// HTTP transport over `reqwest`, bounded by [`RPC_TIMEOUT`].
pub struct HttpTransport {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport for the node at `node_url` (trailing slashes
    /// tolerated). The underlying connection pool lives exactly as long
    /// as this value.
    pub fn new(node_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(RPC_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            endpoint: format!("{}{}", node_url.trim_end_matches('/'), RPC_PATH),
            client,
        }
    }

    /// The full endpoint URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    async fn call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, SdkError> {
        let request = RpcRequest::new(Utc::now().timestamp_millis() as u64, method, params);
        debug!(method, id = request.id, "rpc call");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| SdkError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SdkError::Transport(e.to_string()))?;
        let body = decode_body(status, &bytes)?;

        if let Some(err) = body.error {
            warn!(method, code = err.code, message = %err.message, "rpc error");
            return Err(SdkError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        if !status.is_success() {
            // No error object to explain the failure; all we have is HTTP.
            return Err(SdkError::Transport(format!("http status {status}")));
        }

        Ok(body.result.unwrap_or(serde_json::Value::Null))
    }
}

/// Decode a response body into the RPC envelope, attributing garbage on a
/// failed HTTP status to the transport. A proxy's HTML error page is not a
/// malformed RPC envelope; a node that answered 200 with junk is.
fn decode_body(status: reqwest::StatusCode, bytes: &[u8]) -> Result<RpcResponse, SdkError> {
    match serde_json::from_slice(bytes) {
        Ok(body) => Ok(body),
        Err(_) if !status.is_success() => {
            Err(SdkError::Transport(format!("http status {status}")))
        }
        Err(e) => Err(SdkError::Decode(format!("invalid rpc response body: {e}"))),
    }
}
