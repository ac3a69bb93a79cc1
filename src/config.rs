// src/config.rs
// =============================================================================
// Turns parsed CLI arguments into a validated run configuration.
//
// Checks done here, before any network traffic:
// - the base URL parses and uses http or https
// - the base URL has no query or fragment and ends in '/', so
//   "<base><year>/" is a real child path
// - concurrency and timeout are at least 1
// =============================================================================

use anyhow::{anyhow, bail, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub output: PathBuf,
    pub concurrency: usize,
    pub timeout: Duration,
    pub title: String,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        if cli.concurrency == 0 {
            bail!("--concurrency must be at least 1");
        }
        if cli.timeout == 0 {
            bail!("--timeout must be at least 1 second");
        }

        Ok(Self {
            base_url: normalize_base_url(&cli.base_url)?,
            output: cli.output.clone(),
            concurrency: cli.concurrency,
            timeout: Duration::from_secs(cli.timeout),
            title: cli.title.clone(),
        })
    }
}

// Validates the listing URL and makes sure it ends with '/'
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).map_err(|e| anyhow!("Invalid URL '{}': {}", raw, e))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        bail!("Unsupported URL scheme '{}' in {}", parsed.scheme(), raw);
    }
    // year paths are appended to the string, so nothing may follow the path
    if parsed.query().is_some() || parsed.fragment().is_some() {
        bail!("Listing URL must not have a query or fragment: {}", raw);
    }

    let mut base = raw.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(base)
}
