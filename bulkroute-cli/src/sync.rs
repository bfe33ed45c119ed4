//! Sync loop: converge one domain's remote routes onto a desired set.
//!
//! Batches go out one at a time with a pause in between. The first failed
//! batch stops the run; batches already sent stay applied.

use bulkroute_client::{ClientError, RouteApi};
use bulkroute_types::{apply_changes, compute_changes, split_changes, ConfigError, RoutingSet};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub domain: String,
    pub max_batch: usize,
    pub delay: Duration,
    pub dry_run: bool,
}

impl SyncOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.domain.trim().is_empty() {
            return Err(ConfigError::invalid("domain", "domain must not be empty"));
        }
        if self.max_batch == 0 {
            return Err(ConfigError::invalid("max", "batch limit must be at least 1"));
        }
        Ok(())
    }
}

/// What a sync run saw and did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub existing_total: usize,
    pub existing_in_domain: usize,
    pub desired: usize,
    pub changes: usize,
    pub batches_planned: usize,
    pub batches_applied: usize,
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("error getting routes: {0}")]
    Fetch(#[source] ClientError),

    #[error("error setting routes in batch {batch} of {total} ({applied} applied before it): {source}")]
    Batch {
        batch: usize,
        total: usize,
        applied: usize,
        #[source]
        source: ClientError,
    },
}

pub async fn run_sync<A>(
    api: &A,
    desired: &RoutingSet,
    options: &SyncOptions,
) -> Result<SyncReport, SyncError>
where
    A: RouteApi + ?Sized,
{
    options.validate()?;
    let mut report = SyncReport { desired: desired.len(), ..Default::default() };

    let all = api.fetch_routes().await.map_err(SyncError::Fetch)?;
    report.existing_total = all.len();
    info!("{} total existing routes", all.len());

    // The account sees every domain it manages.
    let current = all.filter_to_domain(&options.domain);
    report.existing_in_domain = current.len();
    info!("{} existing routes for @{}", current.len(), options.domain);
    info!("Map has {} routes", desired.len());
    debug!("Map details: {:?}", desired);

    let changes = compute_changes(&current, desired);
    let stats = changes.stats();
    report.changes = changes.len();
    info!(
        "Found {} changes to make ({} set, {} delete)",
        changes.len(),
        stats.sets,
        stats.deletes
    );

    let batches = split_changes(&changes, options.max_batch)?;
    report.batches_planned = batches.len();

    if options.dry_run {
        for batch in &batches {
            info!("Would modify {} routes", batch.len());
            debug!("Batch details: {:?}", batch);
        }
        let projected = apply_changes(&current, &changes);
        info!(
            "Not making modifications due to dry run; @{} would have {} routes",
            options.domain,
            projected.len()
        );
        return Ok(report);
    }

    let total = batches.len();
    for (index, batch) in batches.iter().enumerate() {
        if index > 0 && !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }
        info!("Modifying {} routes (batch {} of {})", batch.len(), index + 1, total);
        debug!("Batch details: {:?}", batch);

        let result = api.apply_batch(batch).await.map_err(|source| SyncError::Batch {
            batch: index + 1,
            total,
            applied: report.batches_applied,
            source,
        })?;
        report.batches_applied += 1;
        debug!("Server reported {} routes after batch {}", result.len(), index + 1);
    }

    Ok(report)
}
