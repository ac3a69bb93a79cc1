// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every argument has a default, so running `listing-index` with no arguments
// crawls the VIIRS monthly nighttime-light listing and writes ./index.html.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

/// Listing crawled when no URL is given on the command line
pub const DEFAULT_BASE_URL: &str = "https://eogdata.mines.edu/nighttime_light/monthly/v10/";

/// Page title used when --title is not given
pub const DEFAULT_TITLE: &str = "Available Nighttime Light Data";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "listing-index",
    version,
    about = "Crawl a dated directory listing and write a static HTML index",
    long_about = "listing-index reads a web server's directory listing, finds the numeric year \
                  folders and the month folders inside each year, and writes an HTML page \
                  linking to every month it found."
)]
pub struct Cli {
    /// Directory listing to crawl (a trailing '/' is added if missing)
    #[arg(default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Where to write the HTML page (overwritten if it exists)
    #[arg(short, long, default_value = "index.html")]
    pub output: PathBuf,

    /// Maximum number of month listings fetched at the same time
    #[arg(short, long, default_value_t = 10)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Text for the page's <title>
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Print a JSON report to stdout (logs move to stderr)
    #[arg(long)]
    pub json: bool,

    /// Show debug logs (RUST_LOG takes precedence when set)
    #[arg(short, long)]
    pub verbose: bool,
}
