// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate them into a Config and start logging
// 3. Crawl the listing (years, then months) and write the HTML page
// 4. Print a summary (or a JSON report) and exit (0 = success, 2 = error)
//
// A crawl where every request fails is still a success: the page is written,
// it just has no entries.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;        // src/cli.rs - command-line parsing
mod config;     // src/config.rs - validated settings
mod discover;   // src/discover/ - year and month discovery
mod listing;    // src/listing/ - fetching and parsing listing pages
mod logging;    // src/logging.rs - tracing setup
mod pipeline;   // src/pipeline.rs - one full run
mod render;     // src/render/ - the HTML page

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = page written (possibly empty)
//   Err = invalid arguments, client setup failure, or the write failed
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.json);

    let config = Config::from_cli(&cli)?;
    let client =
        listing::build_client(config.timeout).context("failed to build HTTP client")?;

    let report = pipeline::run_pipeline(&client, &config).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(0)
}

fn print_summary(report: &pipeline::Report) {
    println!("📊 Summary:");
    println!("   📅 Years: {}", report.years.len());
    println!("   🗂️  Months: {}", report.months.len());
    println!("   📄 Written to: {}", report.output.display());
}
