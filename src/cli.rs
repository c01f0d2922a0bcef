//! CLI definition using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::Parser;

use crate::wiki::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

/// Wikidart - find a chain of links between two encyclopedia pages
#[derive(Parser, Debug)]
#[command(name = "wikidart")]
#[command(version)]
#[command(about = "Find a chain of links between two encyclopedia pages")]
#[command(
    long_about = "Wikidart starts at one page and follows the links in its body text, level by level, until it reaches the target page or the depth bound. Pages are fetched on demand and never visited twice."
)]
pub struct Cli {
    /// Run configuration file ("start at ...", "end at ...", "maxDepth is N")
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start page, overrides the config file
    #[arg(short, long)]
    pub start: Option<String>,

    /// Target page, overrides the config file
    #[arg(short, long)]
    pub end: Option<String>,

    /// Depth bound, overrides the config file
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Base URL that page identifiers are appended to
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// User-Agent header sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print the result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl Cli {
    /// Whether the command line alone names both ends of the search.
    #[must_use]
    pub const fn has_endpoints(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn defaults_point_at_english_wikipedia() {
        let cli = Cli::try_parse_from(["wikidart"]).unwrap();

        assert_eq!(cli.config, None);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert!(!cli.json);
        assert!(!cli.has_endpoints());
    }

    #[test]
    fn overrides_are_parsed() {
        let cli = Cli::try_parse_from([
            "wikidart",
            "--config",
            "runs/cats.config",
            "-s",
            "Cat",
            "-e",
            "Dog",
            "-d",
            "4",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("runs/cats.config")));
        assert_eq!(cli.start.as_deref(), Some("Cat"));
        assert_eq!(cli.end.as_deref(), Some("Dog"));
        assert_eq!(cli.max_depth, Some(4));
        assert!(cli.json);
        assert!(cli.has_endpoints());
    }

    #[test]
    fn negative_depth_is_rejected() {
        assert!(Cli::try_parse_from(["wikidart", "-d", "-1"]).is_err());
    }
}
