//! # Qubit Client
//!
//! [`QubitClient`] is the SDK's front door: the read-only query façade
//! over the node's RPC methods, plus the transaction lifecycle
//! orchestration.
//!
//! ## Lifecycle
//!
//! ```text
//! build_transaction ──► sign_transaction ──► attach_proof ──► submit
//!      (nonce fetch)        (local, pure)      (optional)      (broadcast)
//! ```
//!
//! No step may be skipped: signing refuses records that already carry a
//! proof, proof attachment refuses unsigned records, submission refuses
//! unsigned records. A submitted record is terminal — resending means
//! building a new record with a fresh nonce.
//!
//! All remote calls go through one [`RpcTransport`] owned by the client;
//! computation (derivation, canonicalization, signing, hashing) never
//! blocks on I/O.

pub mod lookup;
pub mod rpc;
pub mod transport;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::SdkError;
use crate::privacy::build_proof_request;
use crate::transaction::signing::sign_transaction;
use crate::transaction::{Block, ChainInfo, ThreatAssessment, Transaction};
use crate::wallet::Wallet;

pub use lookup::Lookup;
pub use transport::{HttpTransport, RpcTransport};

/// Client for a Qubit node's JSON-RPC API.
///
/// Generic over the transport so tests can script the boundary; production
/// code uses the [`HttpTransport`] default via [`QubitClient::new`].
pub struct QubitClient<T: RpcTransport = HttpTransport> {
    transport: T,
}

impl QubitClient<HttpTransport> {
    /// Connect to the node at `node_url` (e.g. `http://localhost:8332`).
    ///
    /// "Connect" is aspirational — HTTP connections are established lazily
    /// on first call. Construction never touches the network.
    pub fn new(node_url: &str) -> Self {
        Self {
            transport: HttpTransport::new(node_url),
        }
    }
}

impl<T: RpcTransport> QubitClient<T> {
    /// Build a client over an explicit transport. Used by tests and by
    /// callers with custom transports (proxies, instrumented stacks).
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    // -----------------------------------------------------------------------
    // Query façade
    // -----------------------------------------------------------------------

    /// Balance of `address` in sats.
    pub async fn get_balance(&self, address: &str) -> Result<u64, SdkError> {
        let result = self
            .transport
            .call("get_balance", serde_json::json!({ "address": address }))
            .await?;
        decode(result, "balance")
    }

    /// Current nonce for `address`. The next transaction from that sender
    /// must carry exactly this value.
    pub async fn get_nonce(&self, address: &str) -> Result<u64, SdkError> {
        let result = self
            .transport
            .call("get_nonce", serde_json::json!({ "address": address }))
            .await?;
        decode(result, "nonce")
    }

    /// Look up a transaction by its content hash.
    pub async fn get_transaction(&self, tx_hash: &str) -> Lookup<Transaction> {
        self.lookup(
            "get_transaction",
            serde_json::json!({ "hash": tx_hash }),
            "transaction",
        )
        .await
    }

    /// Look up a block by hash or by index.
    ///
    /// Exactly one reference should be supplied; when both are, the hash
    /// wins (matching node behavior). Supplying neither fails with
    /// [`SdkError::MissingBlockReference`] before any network traffic.
    pub async fn get_block(&self, hash: Option<&str>, index: Option<u64>) -> Lookup<Block> {
        let params = match (hash, index) {
            (Some(h), _) => serde_json::json!({ "hash": h }),
            (None, Some(i)) => serde_json::json!({ "index": i }),
            (None, None) => return Lookup::Failed(SdkError::MissingBlockReference),
        };
        self.lookup("get_block", params, "block").await
    }

    /// The current chain tip.
    pub async fn get_latest_block(&self) -> Result<Block, SdkError> {
        let result = self
            .transport
            .call("get_latest_block", serde_json::json!({}))
            .await?;
        decode(result, "latest block")
    }

    /// Chain summary: height, difficulty, total supply, and whatever else
    /// the node chooses to report.
    pub async fn get_chain_info(&self) -> Result<ChainInfo, SdkError> {
        let result = self
            .transport
            .call("get_chain_info", serde_json::json!({}))
            .await?;
        decode(result, "chain info")
    }

    /// Ask the node to verify a delay-function proof.
    pub async fn verify_vdf(
        &self,
        output: &str,
        proof: &str,
        input: &str,
        time: u64,
    ) -> Result<bool, SdkError> {
        #[derive(Deserialize)]
        struct Verdict {
            valid: bool,
        }

        let result = self
            .transport
            .call(
                "verify_vdf",
                serde_json::json!({
                    "output": output,
                    "proof": proof,
                    "input": input,
                    "time": time,
                }),
            )
            .await?;
        let verdict: Verdict = decode(result, "vdf verdict")?;
        Ok(verdict.valid)
    }

    /// Threat assessment for a peer from the node's Neural Guardian.
    pub async fn query_neural_guardian(
        &self,
        peer_id: &str,
    ) -> Result<ThreatAssessment, SdkError> {
        let result = self
            .transport
            .call(
                "neural_guardian_query",
                serde_json::json!({ "peer_id": peer_id }),
            )
            .await?;
        decode(result, "threat assessment")
    }

    // -----------------------------------------------------------------------
    // Transaction lifecycle
    // -----------------------------------------------------------------------

    /// Build an unsigned transaction: validate the recipient, fetch the
    /// sender's current nonce, stamp the current Unix time.
    pub async fn build_transaction(
        &self,
        wallet: &Wallet,
        recipient: &str,
        amount: u64,
        fee: u64,
    ) -> Result<Transaction, SdkError> {
        if !is_well_formed_address(recipient) {
            return Err(SdkError::InvalidRecipient(recipient.to_string()));
        }
        let nonce = self.get_nonce(wallet.address()).await?;
        Ok(Transaction {
            sender: wallet.address().to_string(),
            recipient: recipient.to_string(),
            amount,
            fee,
            nonce,
            timestamp: Utc::now().timestamp() as u64,
            signature: None,
            zk_proof: None,
        })
    }

    /// Request a privacy proof for a signed transaction and attach it.
    ///
    /// The request carries a locally computed spend authorization — never
    /// the private key (see [`crate::privacy`]). Refuses unsigned records:
    /// the proof commits to a signed transaction.
    pub async fn attach_proof(
        &self,
        tx: &mut Transaction,
        wallet: &Wallet,
    ) -> Result<(), SdkError> {
        #[derive(Deserialize)]
        struct ProofEnvelope {
            proof: String,
        }

        if !tx.is_signed() {
            return Err(SdkError::ProofOnUnsigned);
        }
        let request = build_proof_request(wallet, tx.amount);
        let result = self
            .transport
            .call(
                "generate_zk_proof",
                serde_json::to_value(&request)
                    .map_err(|e| SdkError::Decode(format!("proof request: {e}")))?,
            )
            .await?;
        let envelope: ProofEnvelope = decode(result, "zk proof")?;
        tx.zk_proof = Some(envelope.proof);
        Ok(())
    }

    /// Broadcast a signed transaction. Returns its content hash.
    ///
    /// The hash is computed locally from the canonical bytes; the node's
    /// echoed hash is cross-checked and a mismatch is logged, because it
    /// means the node canonicalized differently — an interop bug worth
    /// hearing about immediately.
    pub async fn submit(&self, tx: &Transaction) -> Result<String, SdkError> {
        if !tx.is_signed() {
            return Err(SdkError::SubmitUnsigned);
        }
        let hash = tx.content_hash();
        let result = self
            .transport
            .call(
                "broadcast_transaction",
                serde_json::to_value(tx)
                    .map_err(|e| SdkError::Decode(format!("transaction encode: {e}")))?,
            )
            .await?;
        if let Some(node_hash) = result.as_str() {
            if node_hash != hash {
                warn!(local = %hash, node = %node_hash, "content hash mismatch with node");
            }
        }
        debug!(%hash, "transaction broadcast");
        Ok(hash)
    }

    /// Convenience composition: build → sign → (attach proof) → submit.
    pub async fn send(
        &self,
        wallet: &Wallet,
        recipient: &str,
        amount: u64,
        fee: u64,
        private: bool,
    ) -> Result<String, SdkError> {
        let mut tx = self.build_transaction(wallet, recipient, amount, fee).await?;
        sign_transaction(&mut tx, wallet)?;
        if private {
            self.attach_proof(&mut tx, wallet).await?;
        }
        self.submit(&tx).await
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Shared path for lookups that may legitimately miss: a node-reported
    /// "not found" (or a null result) is a confirmed [`Lookup::Absent`];
    /// every other failure keeps its cause.
    async fn lookup<R: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
        what: &str,
    ) -> Lookup<R> {
        match self.transport.call(method, params).await {
            Ok(serde_json::Value::Null) => Lookup::Absent,
            Ok(value) => match decode(value, what) {
                Ok(decoded) => Lookup::Found(decoded),
                Err(e) => Lookup::Failed(e),
            },
            Err(SdkError::Rpc { code, message }) if rpc::indicates_absence(code, &message) => {
                Lookup::Absent
            }
            Err(e) => Lookup::Failed(e),
        }
    }
}

/// Strictly decode an RPC `result` payload into its expected shape.
fn decode<R: DeserializeOwned>(value: serde_json::Value, what: &str) -> Result<R, SdkError> {
    serde_json::from_value(value).map_err(|e| SdkError::Decode(format!("{what}: {e}")))
}

/// A well-formed address is exactly 64 hex characters (32 bytes).
fn is_well_formed_address(address: &str) -> bool {
    address.len() == crate::config::ADDRESS_HEX_LENGTH
        && address.chars().all(|c| c.is_ascii_hexdigit())
}
