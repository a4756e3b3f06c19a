use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tron_sign::{commands, Result};
use tron_sign_core::{AccountId, LockBytes, MessageDigest};

/// Verify TRON personal message signatures.
#[derive(Parser, Debug)]
#[clap(name = "tron-sign", author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify a signature over a message digest.
    Verify {
        /// Message digest before personal hashing (hex).
        #[clap(short, long)]
        message: MessageDigest,

        /// Lock bytes, r || s || recovery id (hex).
        #[clap(short, long)]
        lock: LockBytes,

        /// Expected account, hex or TRON address.
        #[clap(short, long)]
        account: AccountId,
    },
    /// Run a verification vector file.
    Vector {
        /// Vector file to load.
        #[clap(parse(from_os_str))]
        file: PathBuf,
    },
    /// Derive the account for a public key.
    Address {
        /// SEC1 encoded public key (hex).
        public_key: String,
    },
}

fn run() -> Result<()> {
    let args = Cli::parse();

    match args.command {
        Command::Verify {
            message,
            lock,
            account,
        } => {
            let report = commands::verify(message, lock, account)?;
            serde_json::to_writer_pretty(std::io::stdout(), &report)?;
        }
        Command::Vector { file } => {
            let report = commands::vector(file)?;
            serde_json::to_writer_pretty(std::io::stdout(), &report)?;
        }
        Command::Address { public_key } => {
            let report = commands::address(&public_key)?;
            serde_json::to_writer_pretty(std::io::stdout(), &report)?;
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
