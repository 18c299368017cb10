//! # Privacy Proof Requests
//!
//! Private transactions carry an opaque ZK proof produced by the proof
//! service (`generate_zk_proof`). The circuit math is the service's
//! business; what is the SDK's business is *what crosses the wire to ask
//! for one*.
//!
//! An earlier protocol revision sent the raw private key as a request
//! parameter. That is gone. The request now carries a **spend
//! authorization**: an Ed25519 signature, made locally, over
//! domain-separated `(sender, amount)` predicate bytes. The prover can
//! check that the wallet owner authorized proving this exact predicate,
//! and the only secret-derived artifact on the wire is a signature —
//! which reveals nothing about the key.

use serde::Serialize;

use crate::wallet::Wallet;

/// Domain tag mixed into the authorization payload. Versioned so a future
/// predicate change cannot collide with signatures made under this one.
pub const SPEND_AUTH_DOMAIN: &str = "qubit.zk.spend-authorization.v1";

/// The `generate_zk_proof` request parameters. Note what is absent.
#[derive(Debug, Clone, Serialize)]
pub struct ProofRequest {
    /// The sender address the proof is about.
    pub sender: String,
    /// The amount the predicate covers, in sats.
    pub amount: u64,
    /// Hex-encoded public key the prover verifies `authorization` against.
    pub public_key: String,
    /// Hex-encoded Ed25519 signature over
    /// [`spend_authorization_bytes`]`(sender, amount)`.
    pub authorization: String,
}

/// The exact bytes the wallet signs to authorize a proof request.
///
/// Layout: `domain || 0x00 || sender || 0x00 || amount_le`. Null
/// separators keep field boundaries unambiguous; the amount is a
/// fixed-width little-endian u64.
pub fn spend_authorization_bytes(sender: &str, amount: u64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(SPEND_AUTH_DOMAIN.len() + sender.len() + 10);
    buf.extend_from_slice(SPEND_AUTH_DOMAIN.as_bytes());
    buf.push(0x00);
    buf.extend_from_slice(sender.as_bytes());
    buf.push(0x00);
    buf.extend_from_slice(&amount.to_le_bytes());
    buf
}

/// Build a fully authorized proof request for `(wallet, amount)`.
///
/// All secret-dependent computation happens right here, in-process.
pub fn build_proof_request(wallet: &Wallet, amount: u64) -> ProofRequest {
    let sender = wallet.address().to_string();
    let authorization = wallet
        .sign(&spend_authorization_bytes(&sender, amount))
        .to_hex();
    ProofRequest {
        sender,
        amount,
        public_key: wallet.public_key_hex().to_string(),
        authorization,
    }
}
