//! Catalogue client error types.

use thiserror::Error;

/// Errors that can occur when querying the upstream catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The HTTP request could not be completed.
    #[error("catalogue request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalogue answered with a non-success status.
    #[error("catalogue returned status {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// The request URL.
        url: String,
    },

    /// The catalogue response could not be decoded.
    #[error("could not decode catalogue response: {0}")]
    Decode(String),

    /// The catalogue rejected or could not execute the query.
    #[error("catalogue query failed: {0}")]
    Query(String),
}
