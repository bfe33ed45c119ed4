//! Loader for the desired routing table.
//!
//! The map is a list of `local-part,forward` lines. Lines starting with `#`
//! are comments; any other line that doesn't split into exactly two fields is
//! logged and skipped.

use anyhow::{Context, Result};
use bulkroute_types::{Route, RoutingSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// Reads the map from `path`, or from stdin when no path is given.
pub async fn load_map(path: Option<&Path>, domain: &str) -> Result<RoutingSet> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening map file {}", path.display()))?;
            read_map(BufReader::new(file), domain)
                .await
                .with_context(|| format!("reading map file {}", path.display()))
        }
        None => read_map(BufReader::new(io::stdin()), domain)
            .await
            .context("reading map from stdin"),
    }
}

/// Parses the map on the blocking pool so a stalled reader (an idle stdin
/// pipe) leaves the runtime free to enforce `--timeout`.
pub async fn read_map<R>(reader: R, domain: &str) -> Result<RoutingSet>
where
    R: BufRead + Send + 'static,
{
    let domain = domain.to_string();
    let routes = tokio::task::spawn_blocking(move || parse_map(reader, &domain))
        .await
        .context("map reader task failed")??;
    Ok(routes)
}

/// Parses map lines into routes under `@domain`.
///
/// Aliases are lowercased since the route service stores them that way; when
/// two lines differ only by case the later one wins.
pub fn parse_map<R: BufRead>(reader: R, domain: &str) -> io::Result<RoutingSet> {
    let mut routes = RoutingSet::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split(',').collect();
        let [local, fwd] = fields.as_slice() else {
            info!("Can't parse {:?}", line);
            continue;
        };
        let alias = format!("{}@{}", local.trim(), domain).to_lowercase();
        routes.insert(alias, Route::new(fwd.trim()));
    }
    Ok(routes)
}
