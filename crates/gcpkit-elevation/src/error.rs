//! Error types for elevation providers.

use thiserror::Error;

/// Errors that can occur when fetching elevation data.
#[derive(Debug, Error)]
pub enum ElevationError {
    /// HTTP request error when querying the elevation API.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a different number of results than locations queried.
    #[error("elevation API returned {received} results for {requested} locations")]
    ResponseCountMismatch {
        /// Number of locations queried.
        requested: usize,
        /// Number of results received.
        received: usize,
    },
}
