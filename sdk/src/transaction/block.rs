//! # Block & Chain-Info Response Shapes
//!
//! These types are consumed, never produced: the SDK decodes them from the
//! node's responses and hands them to the caller as-is. Block internals
//! (proof-of-work validity, VDF proofs, Merkle roots) are the node's
//! responsibility to validate — a light client taking the node's word is
//! the trust model here.
//!
//! Decoding is strict (`deny_unknown_fields`): a response with missing,
//! extra, or mistyped fields fails with a decode error instead of being
//! silently shrugged into a half-populated struct.

use serde::{Deserialize, Serialize};

use super::record::Transaction;

/// A block as reported by the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    /// Height of the block, genesis = 0.
    pub index: u64,
    /// Unix timestamp in seconds when the block was sealed.
    pub timestamp: u64,
    /// The ordered transactions included in the block.
    pub transactions: Vec<Transaction>,
    /// Content hash of the parent block.
    pub previous_hash: String,
    /// Merkle root over the included transaction hashes.
    pub merkle_root: String,
    /// Proof-of-work nonce found by the producer.
    pub nonce: u64,
    /// Difficulty target the block was mined against.
    pub difficulty: u32,
    /// Output of the verifiable delay function, when the node ran one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vdf_output: Option<String>,
    /// Wesolowski proof accompanying `vdf_output`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vdf_proof: Option<String>,
    /// The block's own hash. Nodes include it in responses; it is not
    /// recomputed or verified client-side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Summary of chain state from `get_chain_info`.
///
/// The node may report more than the three core fields (mempool size,
/// peer counts, whatever the operator enabled); those land in `extra`
/// untouched. This is the one deliberately open shape in the SDK — the
/// method is defined as extensible on the node side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainInfo {
    /// Current chain height.
    pub height: u64,
    /// Current difficulty target.
    pub difficulty: u64,
    /// Total circulating supply in sats.
    pub total_supply: u64,
    /// Any additional fields the node reported.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Threat assessment for a peer, from `neural_guardian_query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThreatAssessment {
    /// Classified threat category (e.g. `"sybil"`, `"eclipse"`, `"none"`).
    pub threat_type: String,
    /// Model confidence in `[0.0, 1.0]`.
    pub confidence: f64,
    /// Recommended action (e.g. `"ban"`, `"throttle"`, `"allow"`).
    pub action: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block_json() -> serde_json::Value {
        serde_json::json!({
            "index": 42,
            "timestamp": 1_700_000_000u64,
            "transactions": [],
            "previous_hash": "0".repeat(64),
            "merkle_root": "1".repeat(64),
            "nonce": 1337,
            "difficulty": 4,
        })
    }

    #[test]
    fn block_decodes_without_optionals() {
        let block: Block = serde_json::from_value(sample_block_json()).unwrap();
        assert_eq!(block.index, 42);
        assert!(block.vdf_output.is_none());
        assert!(block.hash.is_none());
    }

    #[test]
    fn block_decodes_with_vdf_fields() {
        let mut value = sample_block_json();
        value["vdf_output"] = serde_json::json!("f".repeat(64));
        value["vdf_proof"] = serde_json::json!("e".repeat(64));
        value["hash"] = serde_json::json!("d".repeat(64));
        let block: Block = serde_json::from_value(value).unwrap();
        assert!(block.vdf_output.is_some());
        assert_eq!(block.hash.unwrap(), "d".repeat(64));
    }

    #[test]
    fn block_rejects_unknown_fields() {
        let mut value = sample_block_json();
        value["uncle_blocks"] = serde_json::json!([]);
        assert!(serde_json::from_value::<Block>(value).is_err());
    }

    #[test]
    fn block_rejects_mistyped_fields() {
        let mut value = sample_block_json();
        value["index"] = serde_json::json!("forty-two");
        assert!(serde_json::from_value::<Block>(value).is_err());
    }

    #[test]
    fn chain_info_keeps_extra_fields() {
        let info: ChainInfo = serde_json::from_value(serde_json::json!({
            "height": 100,
            "difficulty": 8,
            "total_supply": 21_000_000u64,
            "mempool_size": 17,
        }))
        .unwrap();
        assert_eq!(info.height, 100);
        assert_eq!(info.extra["mempool_size"], 17);
    }

    #[test]
    fn threat_assessment_decodes() {
        let t: ThreatAssessment = serde_json::from_value(serde_json::json!({
            "threat_type": "sybil",
            "confidence": 0.93,
            "action": "ban",
        }))
        .unwrap();
        assert_eq!(t.threat_type, "sybil");
        assert!(t.confidence > 0.9);
    }
}
