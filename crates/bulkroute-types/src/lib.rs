//! # bulkroute types
//!
//! Routing models and the reconciliation engine for bulk mail-alias routing.
//!
//! - **`error`** - Typed configuration errors
//! - **`models`** - Routes, routing sets, change sets, the differ and the batcher
//!
//! ## Architecture Role
//!
//! `bulkroute-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!          bulkroute-types (this crate)
//!                  │
//!                  ▼
//!          bulkroute-client
//!                  │
//!                  ▼
//!            bulkroute-cli
//! ```
//!
//! Everything here is synchronous and free of I/O. The differ and the batcher
//! never mutate their inputs; they build new sets.

pub mod error;
pub mod models;

pub use error::ConfigError;

pub use models::{
    apply_changes, compute_changes, split_changes, ChangeSet, ChangeStats, Route, RouteChange,
    RouteCounts, RoutingSet,
};
