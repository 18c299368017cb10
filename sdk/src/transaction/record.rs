//! # Transaction Record & Canonical Codec
//!
//! The [`Transaction`] struct is the canonical data entity of the SDK, and
//! [`Transaction::canonical_bytes`] is the single most interop-critical
//! function in the crate: those bytes are what gets signed and what gets
//! double-hashed into the transaction's identifier. Any deviation in field
//! selection, ordering, or whitespace produces signatures and IDs no node
//! will accept.
//!
//! ## Canonical Byte Format
//!
//! Compact JSON (no whitespace) over exactly the six signing fields, with
//! keys in lexicographic order:
//!
//! ```text
//! {"amount":N,"fee":N,"nonce":N,"recipient":"...","sender":"...","timestamp":N}
//! ```
//!
//! `signature` and `zk_proof` are excluded by construction, which is what
//! makes the content hash stable across the signing and proof-attachment
//! steps.

use serde::{Deserialize, Serialize};

use crate::crypto::hash::double_sha256;

/// A Qubit transaction.
///
/// Lifecycle: constructed unsigned → signed → optionally proof-attached →
/// submitted. Once submitted the record is terminal; resending requires a
/// new record with a fresh nonce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transaction {
    /// Sender address: 64 hex chars (32 bytes).
    pub sender: String,
    /// Recipient address: 64 hex chars.
    pub recipient: String,
    /// Amount in sats (1 QBT = 10^8 sats).
    pub amount: u64,
    /// Fee in sats, paid to the block producer.
    pub fee: u64,
    /// Per-sender strictly increasing counter. The node rejects any
    /// `(sender, nonce)` pair it has already accepted — replay protection
    /// lives here, which is why the nonce is part of the signed payload.
    pub nonce: u64,
    /// Unix timestamp in seconds, stamped at construction.
    pub timestamp: u64,
    /// Ed25519 signature over [`canonical_bytes`](Self::canonical_bytes),
    /// 128 hex chars. `None` until signed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Opaque privacy proof from the proof service. `None` for
    /// transparent transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zk_proof: Option<String>,
}

impl Transaction {
    /// The canonical byte form fed to signing and hashing.
    ///
    /// `serde_json`'s `Map` is backed by a `BTreeMap`, so object keys come
    /// out in lexicographic order regardless of insertion order, and
    /// `to_string` emits compact JSON. Together that pins the exact bytes.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        serde_json::json!({
            "sender": self.sender,
            "recipient": self.recipient,
            "amount": self.amount,
            "fee": self.fee,
            "nonce": self.nonce,
            "timestamp": self.timestamp,
        })
        .to_string()
        .into_bytes()
    }

    /// The content-addressed identifier:
    /// `hex(sha256(sha256(canonical_bytes)))`, 64 hex chars.
    ///
    /// Pure in the six signing fields; setting `signature` or `zk_proof`
    /// to anything, or nothing, never changes it.
    pub fn content_hash(&self) -> String {
        hex::encode(double_sha256(&self.canonical_bytes()))
    }

    /// `true` once a signature is attached.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// `true` when a privacy proof is attached.
    pub fn is_private(&self) -> bool {
        self.zk_proof.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tx() -> Transaction {
        Transaction {
            sender: "a".repeat(64),
            recipient: "b".repeat(64),
            amount: 150_000_000,
            fee: 1_000,
            nonce: 7,
            timestamp: 1_234_567_890,
            signature: None,
            zk_proof: None,
        }
    }

    #[test]
    fn canonical_bytes_are_sorted_compact_json() {
        let tx = Transaction {
            sender: "aa".into(),
            recipient: "bb".into(),
            amount: 1,
            fee: 2,
            nonce: 3,
            timestamp: 4,
            signature: None,
            zk_proof: None,
        };
        assert_eq!(
            String::from_utf8(tx.canonical_bytes()).unwrap(),
            r#"{"amount":1,"fee":2,"nonce":3,"recipient":"bb","sender":"aa","timestamp":4}"#
        );
    }

    #[test]
    fn identical_fields_identical_bytes() {
        assert_eq!(sample_tx().canonical_bytes(), sample_tx().canonical_bytes());
        assert_eq!(sample_tx().content_hash(), sample_tx().content_hash());
    }

    #[test]
    fn content_hash_is_64_hex_chars() {
        let hash = sample_tx().content_hash();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_does_not_affect_canonical_form() {
        let mut tx = sample_tx();
        let bytes = tx.canonical_bytes();
        let hash = tx.content_hash();

        tx.signature = Some("de".repeat(64));
        assert_eq!(tx.canonical_bytes(), bytes);
        assert_eq!(tx.content_hash(), hash);
    }

    #[test]
    fn zk_proof_does_not_affect_canonical_form() {
        let mut tx = sample_tx();
        let hash = tx.content_hash();

        tx.zk_proof = Some("opaque proof artifact".into());
        assert_eq!(tx.content_hash(), hash);

        tx.zk_proof = Some(String::new());
        assert_eq!(tx.content_hash(), hash);
    }

    #[test]
    fn different_nonce_different_hash() {
        // Replay prevention depends on this: same sender, recipient,
        // amount, fee, and timestamp, but a fresh nonce, must produce a
        // fresh identifier.
        let tx1 = sample_tx();
        let mut tx2 = sample_tx();
        tx2.nonce += 1;
        assert_ne!(tx1.content_hash(), tx2.content_hash());
    }

    #[test]
    fn every_signing_field_participates() {
        let base = sample_tx().content_hash();
        let mutations: [fn(&mut Transaction); 6] = [
            |t| t.sender = "c".repeat(64),
            |t| t.recipient = "d".repeat(64),
            |t| t.amount += 1,
            |t| t.fee += 1,
            |t| t.nonce += 1,
            |t| t.timestamp += 1,
        ];
        for mutate in mutations {
            let mut tx = sample_tx();
            mutate(&mut tx);
            assert_ne!(tx.content_hash(), base);
        }
    }

    #[test]
    fn serde_roundtrip_preserves_record() {
        let mut tx = sample_tx();
        tx.signature = Some("ab".repeat(64));
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, back);
    }

    #[test]
    fn wire_form_omits_absent_optionals() {
        let json = serde_json::to_string(&sample_tx()).unwrap();
        assert!(!json.contains("signature"));
        assert!(!json.contains("zk_proof"));
    }

    #[test]
    fn decode_rejects_unknown_fields() {
        let mut value = serde_json::to_value(sample_tx()).unwrap();
        value["surprise"] = serde_json::json!(true);
        assert!(serde_json::from_value::<Transaction>(value).is_err());
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let mut value = serde_json::to_value(sample_tx()).unwrap();
        value.as_object_mut().unwrap().remove("nonce");
        assert!(serde_json::from_value::<Transaction>(value).is_err());
    }
}
