//! Async client for the bulk route management API.
//!
//! [`BulkRouteClient`] wraps the HTTP endpoints; [`RouteApi`] is the narrow
//! interface the sync loop talks to, so it can be driven without a server.

mod api;
mod client;
mod error;
mod types;

pub use api::RouteApi;
pub use client::BulkRouteClient;
pub use error::ClientError;
pub use types::*;
