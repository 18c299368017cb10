//! # CLI Interface
//!
//! Defines the command-line argument structure for `qubit-wallet` using
//! `clap` derive. Supports six subcommands: `generate`, `balance`,
//! `send`, `info`, `block`, and `tx`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use qubit_sdk::config::DEFAULT_NODE_URL;

/// Qubit command-line wallet.
///
/// A thin wallet over the Qubit SDK: generates keys locally, queries a
/// node over JSON-RPC, and builds, signs, and broadcasts transactions.
/// Private keys never leave this machine.
#[derive(Parser, Debug)]
#[command(
    name = "qubit-wallet",
    about = "Qubit command-line wallet",
    version,
    propagate_version = true
)]
pub struct QubitWalletCli {
    /// JSON-RPC endpoint of the Qubit node.
    #[arg(long, env = "QUBIT_NODE_URL", default_value = DEFAULT_NODE_URL, global = true)]
    pub node_url: String,

    /// Log output format: "pretty" or "json".
    #[arg(long, env = "QUBIT_LOG_FORMAT", default_value = "pretty", global = true)]
    pub log_format: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the wallet binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fresh keypair and write it to a key file.
    Generate(GenerateArgs),
    /// Query an address balance.
    Balance(BalanceArgs),
    /// Build, sign, and broadcast a transaction.
    Send(SendArgs),
    /// Print the node's chain summary.
    Info,
    /// Look up a block by hash or index.
    Block(BlockArgs),
    /// Look up a transaction by content hash.
    Tx(TxArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to write the hex-encoded private key to.
    ///
    /// Refuses to overwrite an existing file.
    #[arg(long, short = 'o', env = "QUBIT_KEY_FILE", default_value = "qubit.key")]
    pub out: PathBuf,
}

/// Arguments for the `balance` subcommand.
#[derive(Parser, Debug)]
pub struct BalanceArgs {
    /// Address to query. When omitted, the key file's own address is used.
    #[arg(long, short = 'a')]
    pub address: Option<String>,

    /// Path to the key file, used only when `--address` is omitted.
    #[arg(long, short = 'k', env = "QUBIT_KEY_FILE", default_value = "qubit.key")]
    pub key_file: PathBuf,
}

/// Arguments for the `send` subcommand.
#[derive(Parser, Debug)]
pub struct SendArgs {
    /// Path to the sender's key file.
    #[arg(long, short = 'k', env = "QUBIT_KEY_FILE", default_value = "qubit.key")]
    pub key_file: PathBuf,

    /// Recipient address (64 hex characters).
    #[arg(long, short = 't')]
    pub to: String,

    /// Amount to send, in QBT (e.g. `1.5`).
    #[arg(long, short = 'a')]
    pub amount: f64,

    /// Fee in sats. Defaults to the network's customary flat fee.
    #[arg(long, default_value_t = qubit_sdk::config::DEFAULT_FEE_SATS)]
    pub fee: u64,

    /// Shield the transaction with a zero-knowledge proof.
    #[arg(long)]
    pub private: bool,
}

/// Arguments for the `block` subcommand.
#[derive(Parser, Debug)]
pub struct BlockArgs {
    /// Block hash (64 hex characters). Takes precedence over `--index`.
    #[arg(long)]
    pub hash: Option<String>,

    /// Block index (height).
    #[arg(long, short = 'i')]
    pub index: Option<u64>,
}

/// Arguments for the `tx` subcommand.
#[derive(Parser, Debug)]
pub struct TxArgs {
    /// Transaction content hash (64 hex characters).
    pub hash: String,
}
