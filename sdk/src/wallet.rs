//! # Wallet
//!
//! A [`Wallet`] is the user-facing key-material bundle: the Ed25519
//! keypair plus the derived address. All three identifiers travel as
//! 64-character lowercase hex.
//!
//! ## Derivation chain
//!
//! ```text
//! private_key (32 bytes, CSPRNG or imported)
//!     │  Ed25519 scalar multiplication
//!     ▼
//! public_key (32 bytes)
//!     │  SHA-256
//!     ▼
//! address (32 bytes)
//! ```
//!
//! Both arrows are pure one-way functions: the public key and address are
//! *always* re-derivable from the private key alone, and the wallet holds
//! no independent mutable state. Construct once, use immutably, drop.

use std::fmt;

use crate::crypto::hash::sha256;
use crate::crypto::keys::{QubitKeypair, QubitPublicKey, QubitSignature};
use crate::error::SdkError;

/// A Qubit wallet: keypair plus cached hex identifiers.
///
/// The cached strings are a pure function of the keypair — they exist so
/// that hot paths (every transaction carries the sender address) don't
/// re-derive and re-encode on each use.
#[derive(Clone)]
pub struct Wallet {
    keypair: QubitKeypair,
    public_key_hex: String,
    address: String,
}

impl Wallet {
    /// Create a wallet with a freshly generated private key.
    pub fn generate() -> Self {
        Self::from_keypair(QubitKeypair::generate())
    }

    /// Import a wallet from a 64-hex-char private key.
    ///
    /// Fails with [`SdkError::MalformedKey`] when the string is not exactly
    /// 32 bytes of valid hex.
    pub fn from_private_key(private_key_hex: &str) -> Result<Self, SdkError> {
        Ok(Self::from_keypair(QubitKeypair::from_hex(private_key_hex)?))
    }

    fn from_keypair(keypair: QubitKeypair) -> Self {
        let public_key = keypair.public_key();
        let address = derive_address(&public_key);
        Self {
            public_key_hex: public_key.to_hex(),
            address,
            keypair,
        }
    }

    /// The wallet's address: `hex(sha256(public_key_bytes))`, 64 chars.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The hex-encoded public key, 64 chars. Safe to share.
    pub fn public_key_hex(&self) -> &str {
        &self.public_key_hex
    }

    /// The typed public key, for signature verification.
    pub fn public_key(&self) -> QubitPublicKey {
        self.keypair.public_key()
    }

    /// Export the hex-encoded private key. The only secret in the system;
    /// treat the returned string accordingly.
    pub fn private_key_hex(&self) -> String {
        self.keypair.to_hex()
    }

    /// Sign an arbitrary byte payload with the wallet's private key.
    pub fn sign(&self, payload: &[u8]) -> QubitSignature {
        self.keypair.sign(payload)
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Address only. The private key has no business in debug output.
        write!(f, "Wallet({})", self.address)
    }
}

/// Derive the address for a public key: the SHA-256 digest of the raw
/// 32 key bytes, hex-encoded.
pub fn derive_address(public_key: &QubitPublicKey) -> String {
    hex::encode(sha256(public_key.as_bytes()))
}
