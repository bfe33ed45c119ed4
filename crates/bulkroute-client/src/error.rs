//! Error types for the bulk route client.

use thiserror::Error;

/// Errors that can occur when talking to the bulk route API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response arrived.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Base URL could not be parsed or cannot carry path segments.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Server answered with something other than 200 OK.
    #[error("HTTP response {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body as sent by the server.
        body: String,
    },

    /// Server returned a body that could not be decoded.
    #[error("Invalid response from {endpoint}: {message}")]
    InvalidResponse {
        /// Endpoint path the response came from.
        endpoint: String,
        /// Decoder error.
        message: String,
    },
}
