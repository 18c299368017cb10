// Copyright (c) 2026 Qubit Protocol Developers. MIT License.
// See LICENSE for details.

//! # Qubit SDK — Client Library
//!
//! A high-level Rust interface for interacting with a Qubit node:
//!
//! - **wallet** — key generation, deterministic address derivation, signing.
//! - **transaction** — canonical serialization, content-addressed hashing,
//!   and the typed block/chain-info shapes the node returns.
//! - **client** — the JSON-RPC boundary: balance/nonce/block/transaction
//!   queries, VDF proof verification, Neural Guardian threat queries, and
//!   the full build → sign → (prove) → broadcast lifecycle.
//! - **privacy** — the client-side spend authorization attached to private
//!   transaction proof requests. The private key never leaves the process.
//! - **crypto** — Ed25519 keypairs and the SHA-256 hashing primitives.
//!
//! ## Design Philosophy
//!
//! 1. The canonical byte form of a transaction is sacred. Two independent
//!    implementations must produce identical bytes or nothing interoperates.
//! 2. All cryptography comes from audited crates. The SDK composes, it does
//!    not invent.
//! 3. Remote failures are surfaced, not swallowed. A lookup that could not
//!    reach the node says so instead of pretending the record is absent.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qubit_sdk::client::QubitClient;
//! use qubit_sdk::units::qbt_to_sats;
//! use qubit_sdk::wallet::Wallet;
//!
//! # async fn demo() -> Result<(), qubit_sdk::error::SdkError> {
//! let client = QubitClient::new("http://localhost:8332");
//! let wallet = Wallet::generate();
//!
//! let balance = client.get_balance(wallet.address()).await?;
//! let tx_hash = client
//!     .send(&wallet, &"a".repeat(64), qbt_to_sats(1.5), 1_000, false)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod crypto;
pub mod error;
pub mod privacy;
pub mod transaction;
pub mod units;
pub mod wallet;
