//! One complete search run: banner, staged search, result.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use wikidart_core::{Explorer, NeighborSource, SearchTree};

use crate::config::RunConfig;
use crate::report::{Reporter, SearchReport};

/// Search from `config.start` to `config.end` through `source`, writing
/// progress and the final result to `reporter`.
///
/// # Errors
///
/// Fails if the reporter cannot write, or if the source fails on any page
/// the search needs. The source's [`wikidart_core::Error`] stays reachable
/// through [`anyhow::Error::downcast_ref`].
pub async fn run_search<S, W>(
    config: &RunConfig,
    source: &S,
    reporter: &mut Reporter<W>,
) -> Result<SearchReport>
where
    S: NeighborSource + ?Sized,
    W: Write,
{
    reporter.welcome(config)?;
    info!(
        start = %config.start,
        end = %config.end,
        max_depth = config.options.max_depth,
        "Wikidart search starting"
    );

    let started = Instant::now();
    let mut tree = SearchTree::new(config.start.clone());
    let mut explorer =
        Explorer::new(&mut tree, source, config.end.clone()).with_observer(reporter);
    let found = explorer
        .run(config.options.max_depth)
        .await
        .with_context(|| format!("Search from '{}' to '{}' failed", config.start, config.end))?;
    let fetches = explorer.fetches();
    let elapsed = started.elapsed();

    let report = match found {
        Some(node) => SearchReport::found(tree.path_steps(node)?, elapsed, fetches),
        None => SearchReport::not_found(elapsed, fetches),
    };
    info!(
        found = report.found,
        pages = tree.len(),
        fetches,
        ?elapsed,
        "Wikidart search finished"
    );

    reporter.finish(&report)?;
    Ok(report)
}
