//! # Protocol Configuration & Constants
//!
//! Every magic number the SDK relies on lives here. These values are fixed
//! by the Qubit wire protocol — changing them breaks interoperability with
//! every deployed node, so treat this file as consensus-adjacent.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Identifiers & Key Material
// ---------------------------------------------------------------------------

/// Ed25519 secret keys are 32 bytes.
pub const PRIVATE_KEY_LENGTH: usize = 32;

/// Ed25519 public (verifying) keys are 32 bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Ed25519 signatures are 64 bytes. Always. If yours isn't, something has
/// gone terribly wrong.
pub const SIGNATURE_LENGTH: usize = 64;

/// Addresses are the SHA-256 digest of the public key: 32 bytes,
/// transported as 64 lowercase hex characters.
pub const ADDRESS_LENGTH: usize = 32;

/// Hex length of an address, public key, or transaction hash (32 bytes * 2).
pub const ADDRESS_HEX_LENGTH: usize = 64;

/// Hex length of a signature (64 bytes * 2).
pub const SIGNATURE_HEX_LENGTH: usize = 128;

// ---------------------------------------------------------------------------
// Monetary Units
// ---------------------------------------------------------------------------

/// Smallest-unit scale: 1 QBT = 10^8 sats, Bitcoin-style.
pub const SATS_PER_QBT: u64 = 100_000_000;

/// Default transaction fee in sats (0.00001 QBT). Nodes may enforce their
/// own minimum; this is merely a sane client-side default.
pub const DEFAULT_FEE_SATS: u64 = 1_000;

// ---------------------------------------------------------------------------
// RPC Boundary
// ---------------------------------------------------------------------------

/// JSON-RPC protocol version carried in every request envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// Endpoint path appended to the node base URL.
pub const RPC_PATH: &str = "/rpc";

/// Hard ceiling on any single RPC round trip. A node that takes longer than
/// this is treated as unreachable; the caller owns retry policy.
pub const RPC_TIMEOUT: Duration = Duration::from_secs(10);

/// Default node endpoint for local development.
pub const DEFAULT_NODE_URL: &str = "http://localhost:8332";
