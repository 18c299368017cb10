//! # Hashing Utilities
//!
//! SHA-256 and the double-SHA-256 construction used for transaction
//! content hashes. Double hashing (`SHA-256(SHA-256(data))`) follows the
//! Bitcoin lineage the Qubit wire format inherited: it closes the length
//! extension hole in plain SHA-256 and, more importantly here, it is what
//! every deployed node computes. Interoperability beats elegance.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of the input data.
///
/// Returns a 32-byte digest as a `Vec<u8>`. Most callers immediately feed
/// the result back into another hash or an encoder, so the heap allocation
/// is noise next to the hash itself.
///
/// # Example
///
/// ```
/// use qubit_sdk::crypto::sha256;
///
/// assert_eq!(sha256(b"qubit").len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute the SHA-256 hash and return a fixed-size array.
///
/// Same digest as [`sha256`], for call sites where the array type
/// propagates naturally and the allocation would be pure waste.
pub fn sha256_array(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let mut output = [0u8; 32];
    output.copy_from_slice(&hasher.finalize());
    output
}

/// Compute the double-SHA-256 hash: `SHA-256(SHA-256(data))`.
///
/// This is the transaction content-hash primitive. The outer hash runs over
/// the 32-byte inner digest, not over its hex encoding.
///
/// # Example
///
/// ```
/// use qubit_sdk::crypto::double_sha256;
///
/// let id = double_sha256(b"canonical transaction bytes");
/// assert_eq!(id.len(), 32);
/// ```
pub fn double_sha256(data: &[u8]) -> Vec<u8> {
    sha256(&sha256(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_empty_known_vector() {
        // The canonical test vector everyone should have memorized by now.
        let hash = sha256(b"");
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(hash, expected);
    }

    #[test]
    fn sha256_deterministic() {
        assert_eq!(sha256(b"qubit"), sha256(b"qubit"));
    }

    #[test]
    fn array_matches_vec() {
        assert_eq!(sha256(b"abc"), sha256_array(b"abc").to_vec());
    }

    #[test]
    fn double_differs_from_single() {
        let single = sha256(b"qubit");
        let double = double_sha256(b"qubit");
        assert_ne!(single, double);
        // And the double is exactly the hash of the single digest bytes.
        assert_eq!(double, sha256(&single));
    }

    #[test]
    fn double_sha256_known_vector() {
        // hex("hello") double-hashed, cross-checked against Bitcoin tooling.
        let digest = double_sha256(b"hello");
        assert_eq!(
            hex::encode(digest),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }
}
