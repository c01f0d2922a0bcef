//! # Wikidart - entry point
//!
//! ## Run Sequence
//!
//! 1. **Configuration** - Parse the command line and the config file
//! 2. **Source** - Build the HTTP client that fetches pages
//! 3. **Search** - Grow the tree from the start page, stage by stage
//! 4. **Report** - Print the found path, or that none was found, with the elapsed time
//!
//! ## Error Handling
//!
//! Configuration problems stop the program before any request is made. A
//! page that cannot be fetched or parsed aborts the whole search; nothing
//! is reported but the error.

#![forbid(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![forbid(clippy::panic)]
#![deny(clippy::expect_used)]

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use wikidart::cli::Cli;
use wikidart::config::RunConfig;
use wikidart::report::{OutputFormat, Reporter};
use wikidart::run_search;
use wikidart::wiki::WikiSource;

/// Main entry point for Wikidart.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = RunConfig::from_cli(&cli).context("Invalid run configuration")?;
    let source = WikiSource::new(&cli.base_url, &cli.user_agent)
        .context("Failed to set up the page source")?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };
    let mut reporter = Reporter::new(io::stdout().lock(), format);

    run_search(&config, &source, &mut reporter).await?;
    Ok(())
}

/// Initialize tracing subscriber with environment filter.
///
/// Logs go to stderr so that stdout only carries the report.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
