//! Developer CLI for SecretKit.
//!
//! Drives the password store end-to-end against the in-memory secure store:
//! store a password, read it back (optionally through a simulated
//! user-presence prompt), then wipe it. Useful for demoing the API without a
//! device keychain.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use eyre::{bail, Result};
use secretkit_core::logger::{LogLevel, Logger};
use secretkit_core::platform::{AuthBehavior, MemorySecureStore};
use secretkit_core::{logger, PasswordStore, StoreConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "secretkit", version, about = "SecretKit developer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Store a password, read it back, and wipe it again.
    Demo {
        /// Password to run the flow with.
        #[arg(default_value = "123456")]
        password: String,
        /// Gate the stored password behind a user-presence prompt.
        #[arg(long)]
        require_presence: bool,
        /// Simulate the user dismissing the prompt on read-back.
        #[arg(long, conflicts_with = "deny_auth")]
        cancel_auth: bool,
        /// Simulate a rejected passcode or biometric on read-back.
        #[arg(long)]
        deny_auth: bool,
    },
}

/// Forwards library log records to stderr.
struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, message: String) {
        eprintln!("[secretkit:{level:?}] {message}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    logger::set_logger(Arc::new(ConsoleLogger));

    let cli = Cli::parse();
    match cli.command {
        Command::Demo {
            password,
            require_presence,
            cancel_auth,
            deny_auth,
        } => demo(password, require_presence, cancel_auth, deny_auth).await,
    }
}

async fn demo(
    password: String,
    require_presence: bool,
    cancel_auth: bool,
    deny_auth: bool,
) -> Result<()> {
    let backend = Arc::new(MemorySecureStore::new());
    let store = PasswordStore::new(
        StoreConfig::for_app(Some("secretkit-cli".to_owned())),
        backend.clone(),
    );

    store.store(password.into_bytes(), require_presence)?;
    tracing::info!(require_presence, "password stored");

    if cancel_auth {
        backend.set_auth_behavior(AuthBehavior::Cancel);
    } else if deny_auth {
        backend.set_auth_behavior(AuthBehavior::Deny);
    }

    match store.try_load().await {
        Ok(password) => println!("loaded: {password}"),
        Err(err) => bail!("nothing loaded: {err}"),
    }

    if store.delete() {
        tracing::info!("password wiped");
    }
    match store.load().await {
        None => println!("store is empty again"),
        Some(_) => bail!("password survived deletion"),
    }

    Ok(())
}
