// src/discover/years.rs
// =============================================================================
// Finds the year folders at the top of the listing.
//
// A year is any directory name made only of digits. We don't check that it
// looks like a calendar year; "0042" would pass too.
// =============================================================================

use reqwest::Client;
use std::collections::BTreeSet;
use tracing::info;

use crate::listing::list_directories;

// Fetches the base listing once and keeps the numeric folder names
//
// Returns: deduplicated years in ascending (lexicographic) order
pub async fn discover_years(client: &Client, base_url: &str) -> BTreeSet<String> {
    let names = list_directories(client, base_url).await;
    let years = filter_years(names);

    info!(count = years.len(), "discovered year directories");
    years
}

// Keeps only names that qualify as years, deduplicated and sorted
pub fn filter_years(names: impl IntoIterator<Item = String>) -> BTreeSet<String> {
    names.into_iter().filter(|name| is_year(name)).collect()
}

// Non-empty and ASCII digits only
pub fn is_year(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit())
}
