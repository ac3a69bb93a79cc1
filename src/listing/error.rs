// src/listing/error.rs
// =============================================================================
// The one failure class a listing fetch can have.
//
// Callers mostly collapse it into "no entries", but keeping it typed lets the
// logs (and tests) say *why* a listing came back empty.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Why a directory listing could not be read.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered, but not with 200 OK.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// Timeout, DNS, TLS, connection reset, or an unreadable body.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Returns true for status-code failures, which are logged quietly.
    pub fn is_status(&self) -> bool {
        matches!(self, FetchError::Status { .. })
    }
}
