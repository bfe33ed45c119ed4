//! Route API trait used by the sync loop.

use crate::error::ClientError;
use async_trait::async_trait;
use bulkroute_types::{ChangeSet, RoutingSet};

/// The two remote operations a sync run needs.
#[async_trait]
pub trait RouteApi: Send + Sync {
    /// Every route the account is authorized to see, across all its domains.
    async fn fetch_routes(&self) -> Result<RoutingSet, ClientError>;

    /// Submits one batch and returns the routes the server reports back.
    async fn apply_batch(&self, batch: &ChangeSet) -> Result<RoutingSet, ClientError>;
}
