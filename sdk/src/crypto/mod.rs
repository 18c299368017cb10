//! Cryptographic primitives: Ed25519 keypairs and SHA-256 hashing.
//!
//! Nothing in here is novel, and that is the point. The SDK composes
//! audited implementations (`ed25519-dalek`, `sha2`) behind small,
//! domain-shaped types.

pub mod hash;
pub mod keys;

pub use hash::{double_sha256, sha256, sha256_array};
pub use keys::{QubitKeypair, QubitPublicKey, QubitSignature};
