// src/listing/fetch.rs
// =============================================================================
// This module downloads one directory listing and turns it into names.
//
// Two layers:
// - fetch_directories: the typed version, returns Result<Vec<String>, FetchError>
// - list_directories: the forgiving version used by discovery, which logs the
//   failure and hands back an empty list instead
//
// There are no retries. A timeout, a DNS failure and a 404 all end up as
// "this directory has no entries".
// =============================================================================

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use super::error::FetchError;
use super::parse::extract_directory_names;

// Builds the HTTP client shared by every fetch in a run
//
// The timeout applies to each request on its own; there is no overall deadline.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("listing-index/", env!("CARGO_PKG_VERSION")))
        .build()
}

// Fetches a listing page and extracts its subdirectory names
//
// Parameters:
//   client: shared reqwest client (carries the timeout)
//   url: listing URL, normally ending in '/'
//
// Returns: directory names in document order, or the reason there are none
pub async fn fetch_directories(client: &Client, url: &str) -> Result<Vec<String>, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    Ok(extract_directory_names(&body))
}

// Same as fetch_directories, but never fails
//
// Status failures are only visible at debug level; transport failures get a
// warning with the URL and the error text.
pub async fn list_directories(client: &Client, url: &str) -> Vec<String> {
    match fetch_directories(client, url).await {
        Ok(names) => {
            debug!(url, entries = names.len(), "fetched listing");
            names
        }
        Err(e) if e.is_status() => {
            debug!("{}", e);
            Vec::new()
        }
        Err(e) => {
            warn!("Error fetching listing: {}", e);
            Vec::new()
        }
    }
}
