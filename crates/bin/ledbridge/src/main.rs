//! # ledbridge — command-line front end
//!
//! Composition root that wires the reqwest adapter into the form bridge.
//!
//! ## Responsibilities
//! - Parse command-line arguments
//! - Load configuration (config file, env vars, flags)
//! - Initialise `tracing` logging on stderr
//! - Construct the HTTP client (adapter) and the terminal notifier
//! - Run the requested subcommand and map its outcome to the exit status
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod batch;
mod cli;
mod commands;
mod config;
mod notifier;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ledbridge_adapter_http_reqwest::ReqwestApiClient;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;
use crate::notifier::TerminalNotifier;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config, cli.base_url.as_deref())
        .with_context(|| format!("cannot load configuration from {}", cli.config.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let client = ReqwestApiClient::new(&config.api).context("cannot create HTTP client")?;
    tracing::debug!(base_url = client.base_url(), "client ready");

    commands::run(cli.command, client, TerminalNotifier::stdio()).await
}
