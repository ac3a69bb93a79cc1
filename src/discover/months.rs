// src/discover/months.rs
// =============================================================================
// Finds the month folders inside every year, a bounded number at a time.
//
// How it works:
// 1. Turn each year into a future that fetches <base><year>/
// 2. Run them through buffer_unordered(concurrency)
// 3. Each future keeps only names that start with its own year
// 4. Concatenate results in whatever order the fetches finish
//
// The month check is a plain string prefix: under "2021", both "202106" and
// "2021-update" are kept. The renderer sorts everything afterwards, so the
// completion order here does not matter.
// =============================================================================

use futures::stream::{self, StreamExt};
use reqwest::Client;
use tracing::debug;

use crate::listing::list_directories;

// Fetches the month listings for all years with at most `concurrency` in flight
//
// Parameters:
//   client: shared HTTP client (cloned per task, it's reference counted)
//   base_url: listing root, ending in '/'
//   years: the year folders to visit
//   concurrency: maximum number of simultaneous fetches (must be >= 1)
//
// Returns: every month identifier found, unordered and possibly duplicated
pub async fn discover_months<I>(
    client: &Client,
    base_url: &str,
    years: I,
    concurrency: usize,
) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let tasks = years.into_iter().map(|year| {
        let client = client.clone();
        let url = year_url(base_url, &year);
        async move { months_for_year(&client, &url, &year).await }
    });

    stream::iter(tasks)
        .buffer_unordered(concurrency.max(1))
        .concat()
        .await
}

// Listing URL for one year
pub fn year_url(base_url: &str, year: &str) -> String {
    format!("{}{}/", base_url, year)
}

async fn months_for_year(client: &Client, url: &str, year: &str) -> Vec<String> {
    let months = filter_months(year, list_directories(client, url).await);
    debug!(year, count = months.len(), "discovered month directories");
    months
}

// Keeps names that start with the year string
pub fn filter_months(year: &str, names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .filter(|name| name.starts_with(year))
        .collect()
}
