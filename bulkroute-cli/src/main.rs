//! `bulkroute` - keep mail-alias routes in line with a map file.

#![allow(clippy::print_stdout, reason = "CLI tool outputs to stdout")]

use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod auth;
mod cli;
mod commands;
mod mapfile;
mod sync;

use cli::{Cli, Commands};

fn init_logging(verbose: bool) -> Result<()> {
    let default_filter =
        if verbose { "info,bulkroute=debug,bulkroute_client=debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let client = commands::connect(&cli)?;

    match &cli.command {
        Commands::Sync { domain, map, dry_run, max, delay } => {
            let options = commands::sync_options(domain, *max, *delay, *dry_run);
            commands::handle_sync(&client, domain, map.as_deref(), options).await
        },
        Commands::Dump { delim } => commands::handle_dump(&client, delim).await,
        Commands::Count => commands::handle_count(&client).await,
        Commands::Get { alias } => commands::handle_get(&client, alias).await,
        Commands::Set { alias, fwd } => commands::handle_set(&client, alias, fwd).await,
        Commands::Delete { alias } => commands::handle_delete(&client, alias).await,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let timeout = Duration::from_secs(cli.timeout);
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let outcome = runtime.block_on(tokio::time::timeout(timeout, run(cli)));
    // A map read parked on stdin must not keep the process alive past the timeout.
    runtime.shutdown_background();

    outcome.with_context(|| format!("timed out after {}s", timeout.as_secs()))?
}
