use anyhow::{Context, Result};
use bulkroute_client::{BulkRouteClient, ClientConfig};
use bulkroute_types::Route;
use comfy_table::Table;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::auth::load_credentials;
use crate::cli::Cli;
use crate::mapfile::load_map;
use crate::sync::{run_sync, SyncOptions};

pub fn connect(cli: &Cli) -> Result<BulkRouteClient> {
    let credentials = load_credentials(&cli.authfile)
        .with_context(|| format!("loading credentials from {}", cli.authfile.display()))?;
    let client = BulkRouteClient::new(ClientConfig {
        base_url: cli.base_url.clone(),
        credentials,
        ..Default::default()
    })?;
    Ok(client)
}

pub async fn handle_sync(
    client: &BulkRouteClient,
    domain: &str,
    map: Option<&Path>,
    options: SyncOptions,
) -> Result<()> {
    let desired = load_map(map, domain).await?;
    let report = run_sync(client, &desired, &options).await?;
    info!(
        "Done: {} changes in {} of {} batches",
        report.changes, report.batches_applied, report.batches_planned
    );
    Ok(())
}

pub async fn handle_dump(client: &BulkRouteClient, delim: &str) -> Result<()> {
    let routes = client.get_routes().await.context("error getting routes")?;
    for (alias, route) in &routes {
        println!("{alias}{delim}{}", route.fwd);
    }
    Ok(())
}

pub async fn handle_count(client: &BulkRouteClient) -> Result<()> {
    let counts = client.count_routes().await.context("error counting routes")?;

    let mut table = Table::new();
    table.set_header(vec!["Domain", "Aliases"]);
    for (domain, count) in counts.iter() {
        table.add_row(vec![domain.to_string(), count.to_string()]);
    }
    table.add_row(vec!["total".to_string(), counts.total().to_string()]);

    println!("{table}");
    Ok(())
}

pub async fn handle_get(client: &BulkRouteClient, alias: &str) -> Result<()> {
    let route = client
        .get_route(alias)
        .await
        .with_context(|| format!("error getting route for {alias}"))?;
    println!("{alias}\t{route}");
    Ok(())
}

pub async fn handle_set(client: &BulkRouteClient, alias: &str, fwd: &str) -> Result<()> {
    if fwd.trim().is_empty() {
        anyhow::bail!("Forwarding address must not be empty; use `delete` to remove {alias}");
    }
    client
        .set_route(alias, &Route::new(fwd.trim()))
        .await
        .with_context(|| format!("error setting route for {alias}"))?;
    info!("Routed {} to {}", alias, fwd.trim());
    Ok(())
}

pub async fn handle_delete(client: &BulkRouteClient, alias: &str) -> Result<()> {
    client
        .delete_route(alias)
        .await
        .with_context(|| format!("error deleting route for {alias}"))?;
    info!("Deleted route for {}", alias);
    Ok(())
}

pub fn sync_options(domain: &str, max: usize, delay_ms: u64, dry_run: bool) -> SyncOptions {
    SyncOptions {
        domain: domain.to_string(),
        max_batch: max,
        delay: Duration::from_millis(delay_ms),
        dry_run,
    }
}
