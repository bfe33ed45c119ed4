//! Core domain models for bulk alias routing.

mod counts;
mod route;
pub mod sync;

pub use counts::RouteCounts;
pub use route::{Route, RoutingSet};
pub use sync::{
    apply_changes, compute_changes, split_changes, ChangeSet, ChangeStats, RouteChange,
};
