//! Transaction signing and verification.
//!
//! Signing is a separate step from building because the wallet may not be
//! available at construction time (hardware signer, remote vault). The
//! signed payload is [`Transaction::canonical_bytes`], which excludes the
//! `signature` and `zk_proof` fields by construction — so signing never
//! perturbs the content hash.

use crate::crypto::keys::QubitPublicKey;
use crate::error::SdkError;
use crate::wallet::Wallet;

use super::record::Transaction;

/// Sign a transaction in place with the wallet's private key.
///
/// Refuses with [`SdkError::ProofBeforeSignature`] when a privacy proof is
/// already attached: the lifecycle order is sign first, prove second,
/// because the proof commits to a signed record.
pub fn sign_transaction(tx: &mut Transaction, wallet: &Wallet) -> Result<(), SdkError> {
    if tx.zk_proof.is_some() {
        return Err(SdkError::ProofBeforeSignature);
    }
    let signature = wallet.sign(&tx.canonical_bytes());
    tx.signature = Some(signature.to_hex());
    Ok(())
}

/// Verify a transaction's signature against the sender's public key.
///
/// `false` for unsigned records, malformed signatures, or signatures over
/// anything other than this record's exact canonical bytes. Fails closed.
pub fn verify_transaction(tx: &Transaction, public_key: &QubitPublicKey) -> bool {
    match &tx.signature {
        Some(sig_hex) => public_key.verify_hex(&tx.canonical_bytes(), sig_hex),
        None => false,
    }
}
