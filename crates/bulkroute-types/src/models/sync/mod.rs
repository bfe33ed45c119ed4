//! Reconciliation engine for alias routing.
//!
//! Converges a remote routing table onto a desired one in two pure steps:
//!
//! - [`compute_changes`] diffs the current and desired [`RoutingSet`]s into a
//!   single [`ChangeSet`] of additions, updates and deletions
//! - [`split_changes`] cuts that change set into batches no larger than the
//!   remote API accepts per request
//!
//! A [`ChangeSet`] keeps three states per alias apart: absent (no change),
//! [`RouteChange::Delete`] and [`RouteChange::Set`].
//!
//! [`RoutingSet`]: crate::models::RoutingSet

mod batch;
mod change;
mod diff;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::get_unwrap)]
mod tests_batch;

pub use batch::split_changes;
pub use change::{ChangeSet, ChangeStats, RouteChange};
pub use diff::{apply_changes, compute_changes};
