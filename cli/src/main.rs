// Copyright (c) 2026 Qubit Protocol Developers. MIT License.
// See LICENSE for details.

//! # Qubit Wallet
//!
//! Entry point for the `qubit-wallet` binary. Parses CLI arguments,
//! initializes logging, and dispatches to the SDK.
//!
//! The binary supports six subcommands:
//!
//! - `generate` — generate a keypair and write it to a key file
//! - `balance`  — query an address balance
//! - `send`     — build, sign, and broadcast a transaction
//! - `info`     — print the node's chain summary
//! - `block`    — look up a block by hash or index
//! - `tx`       — look up a transaction by content hash

mod cli;
mod logging;

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use qubit_sdk::client::{Lookup, QubitClient};
use qubit_sdk::units::{qbt_to_sats, sats_to_qbt};
use qubit_sdk::wallet::Wallet;

use cli::{Commands, QubitWalletCli};
use logging::LogFormat;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = QubitWalletCli::parse();
    logging::init_logging(
        "qubit_wallet=info,qubit_sdk=info",
        LogFormat::from_str_lossy(&cli.log_format),
    );

    let client = QubitClient::new(&cli.node_url);
    match cli.command {
        Commands::Generate(args) => generate(&args),
        Commands::Balance(args) => balance(&client, &args).await,
        Commands::Send(args) => send(&client, &args).await,
        Commands::Info => info(&client).await,
        Commands::Block(args) => block(&client, &args).await,
        Commands::Tx(args) => tx(&client, &args).await,
    }
}

/// Generates a keypair and writes the private key to a file.
fn generate(args: &cli::GenerateArgs) -> Result<()> {
    if args.out.exists() {
        bail!(
            "refusing to overwrite existing key file: {}",
            args.out.display()
        );
    }

    let wallet = Wallet::generate();
    std::fs::write(&args.out, wallet.private_key_hex())
        .with_context(|| format!("failed to write key file: {}", args.out.display()))?;

    // Restrict permissions on Unix.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&args.out, std::fs::Permissions::from_mode(0o600))?;
    }

    tracing::info!(key_path = %args.out.display(), "keypair generated");

    println!("Wallet generated.");
    println!("  Key file   : {}", args.out.display());
    println!("  Address    : {}", wallet.address());
    println!("  Public key : {}", wallet.public_key_hex());
    Ok(())
}

/// Queries a balance, defaulting to the key file's own address.
async fn balance(client: &QubitClient, args: &cli::BalanceArgs) -> Result<()> {
    let address = match &args.address {
        Some(a) => a.clone(),
        None => load_wallet(&args.key_file)?.address().to_string(),
    };
    let sats = client
        .get_balance(&address)
        .await
        .context("balance query failed")?;
    println!("{} QBT ({} sats)", sats_to_qbt(sats), sats);
    Ok(())
}

/// Builds, signs, and broadcasts a transaction, then prints its hash.
async fn send(client: &QubitClient, args: &cli::SendArgs) -> Result<()> {
    let wallet = load_wallet(&args.key_file)?;
    let amount = qbt_to_sats(args.amount);
    if amount == 0 {
        bail!("amount rounds to zero sats: {}", args.amount);
    }

    tracing::info!(
        from = %wallet.address(),
        to = %args.to,
        amount_sats = amount,
        fee_sats = args.fee,
        private = args.private,
        "sending transaction"
    );

    let hash = client
        .send(&wallet, &args.to, amount, args.fee, args.private)
        .await
        .context("send failed")?;
    println!("{}", hash);
    Ok(())
}

/// Prints the node's chain summary as pretty JSON.
async fn info(client: &QubitClient) -> Result<()> {
    let chain_info = client
        .get_chain_info()
        .await
        .context("chain info query failed")?;
    println!("{}", serde_json::to_string_pretty(&chain_info)?);
    Ok(())
}

/// Looks up a block and prints it, or reports its absence.
async fn block(client: &QubitClient, args: &cli::BlockArgs) -> Result<()> {
    let lookup = client.get_block(args.hash.as_deref(), args.index).await;
    print_lookup(lookup, "block")
}

/// Looks up a transaction and prints it, or reports its absence.
async fn tx(client: &QubitClient, args: &cli::TxArgs) -> Result<()> {
    let lookup = client.get_transaction(&args.hash).await;
    print_lookup(lookup, "transaction")
}

/// Prints a lookup result: the entity as pretty JSON when found, a
/// message on stderr when confirmed absent, and the error otherwise.
fn print_lookup<T: serde::Serialize>(lookup: Lookup<T>, what: &str) -> Result<()> {
    match lookup {
        Lookup::Found(entity) => {
            println!("{}", serde_json::to_string_pretty(&entity)?);
            Ok(())
        }
        Lookup::Absent => {
            eprintln!("{} not found", what);
            std::process::exit(1);
        }
        Lookup::Failed(e) => Err(e).with_context(|| format!("{} lookup failed", what)),
    }
}

/// Reads a hex private key from `path` and derives the wallet.
fn load_wallet(path: &Path) -> Result<Wallet> {
    let key_hex = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read key file: {}", path.display()))?;
    Wallet::from_private_key(key_hex.trim())
        .with_context(|| format!("malformed key file: {}", path.display()))
}
