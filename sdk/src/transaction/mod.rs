//! Transaction records and the response shapes the node returns.
//!
//! [`record`] owns the canonical byte form and content hashing — the part
//! of the SDK that must be bit-exact across implementations. [`block`]
//! holds the typed, decode-strict shapes for blocks and chain summaries.

pub mod block;
pub mod record;
pub mod signing;

pub use block::{Block, ChainInfo, ThreatAssessment};
pub use record::Transaction;
pub use signing::{sign_transaction, verify_transaction};
