//! Typed error definitions for bulkroute.
//!
//! The reconciliation engine itself is infallible except for an invalid batch
//! limit; the remaining variants cover loading credentials and options.

mod config;

pub use config::ConfigError;
