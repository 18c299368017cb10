//! # SDK Error Types
//!
//! One crate-level error enum. Client SDKs live or die on how clearly they
//! report remote failure, so the variants distinguish the cases a caller
//! actually branches on: local validation, transport, protocol-level node
//! errors, decode failures, and legitimate absence.

use thiserror::Error;

/// Result alias used throughout the SDK.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Everything that can go wrong between "build a transaction" and "the node
/// accepted it".
#[derive(Debug, Error)]
pub enum SdkError {
    /// Key material failed format validation: not hex, or not exactly
    /// 32 bytes. Intentionally carries no detail — leaking key fragments
    /// through error messages is a classic footgun.
    #[error("malformed private key: expected 64 hex characters (32 bytes)")]
    MalformedKey,

    /// The recipient identifier is not a well-formed 64-hex-char address.
    /// Checked client-side before any network traffic.
    #[error("invalid recipient address: {0:?}")]
    InvalidRecipient(String),

    /// `get_block` was called with neither a hash nor an index. Caught
    /// before the request is built, let alone sent.
    #[error("block lookup requires either a hash or an index")]
    MissingBlockReference,

    /// The node was unreachable, the connection dropped, or the 10 s
    /// timeout elapsed. The request may or may not have been processed.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The node answered with a JSON-RPC error object. Protocol-level:
    /// the wire worked, the node refused.
    #[error("rpc error {code}: {message}")]
    Rpc {
        /// JSON-RPC 2.0 error code.
        code: i64,
        /// Human-readable message from the node.
        message: String,
    },

    /// The node's response did not match the expected shape: missing,
    /// extra, or mistyped fields.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// A lookup legitimately has no result. Produced by
    /// [`Lookup::into_result`](crate::client::lookup::Lookup::into_result)
    /// for callers that want absence as an error.
    #[error("not found")]
    NotFound,

    /// A privacy proof was attached before the record was signed. The
    /// proof commits to a signed transaction; the order is fixed.
    #[error("record already carries a privacy proof; sign before attaching proofs")]
    ProofBeforeSignature,

    /// A proof was requested for an unsigned record. The proof commits to
    /// a signed transaction; sign first.
    #[error("cannot attach a privacy proof to an unsigned transaction")]
    ProofOnUnsigned,

    /// Submission of an unsigned record was refused. `Built → Signed`
    /// cannot be skipped.
    #[error("cannot submit an unsigned transaction")]
    SubmitUnsigned,
}

impl SdkError {
    /// `true` for failures where the request may still have reached the
    /// node (the dangerous kind for non-idempotent operations).
    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        // Callers grep logs for these; keep the phrasing intact.
        assert_eq!(
            SdkError::MalformedKey.to_string(),
            "malformed private key: expected 64 hex characters (32 bytes)"
        );
        assert_eq!(SdkError::NotFound.to_string(), "not found");
        let rpc = SdkError::Rpc {
            code: -32601,
            message: "method not found".into(),
        };
        assert_eq!(rpc.to_string(), "rpc error -32601: method not found");
    }

    #[test]
    fn transport_classification() {
        assert!(SdkError::Transport("timeout".into()).is_transport());
        assert!(!SdkError::NotFound.is_transport());
    }
}
