// src/pipeline.rs
// =============================================================================
// One complete run: years -> months -> sorted page on disk.
//
// Every stage takes values and returns values; nothing is accumulated in
// globals. A run where every fetch fails still writes a valid, empty page.
// =============================================================================

use anyhow::Result;
use reqwest::Client;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::discover::{discover_months, discover_years};
use crate::render::{render_page, sorted_unique, write_page};

// What a run found and where it wrote it
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub base_url: String,
    pub output: PathBuf,
    pub years: Vec<String>,
    pub months: Vec<String>,
}

pub async fn run_pipeline(client: &Client, config: &Config) -> Result<Report> {
    info!(base_url = %config.base_url, "crawling listing");

    let years = discover_years(client, &config.base_url).await;
    let found = discover_months(
        client,
        &config.base_url,
        years.iter().cloned(),
        config.concurrency,
    )
    .await;

    let months = sorted_unique(found);
    info!(count = months.len(), "discovered months");

    let html = render_page(months.iter().cloned(), &config.base_url, &config.title);
    write_page(&config.output, &html)?;
    info!(path = %config.output.display(), "wrote index page");

    Ok(Report {
        base_url: config.base_url.clone(),
        output: config.output.clone(),
        years: years.into_iter().collect(),
        months,
    })
}
