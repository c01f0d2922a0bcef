//! Run configuration.
//!
//! A run is configured by a small text file (`.config` by default):
//!
//! ```text
//! start at Rust_(programming_language)
//! end at Ferris
//! maxDepth is 4
//! ```
//!
//! `start at` and `end at` must open their line, are matched
//! case-insensitively and take the rest of it. Options are whole lines of the form `<name> is <integer>`;
//! `maxDepth` is the only option the search knows about. Command-line flags
//! override anything read from the file.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};
use wikidart_core::DEFAULT_MAX_DEPTH;

use crate::cli::Cli;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = ".config";

#[expect(clippy::expect_used)]
static START_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^\s*start at (.*)$").expect("hardcoded regex pattern is valid")
});

#[expect(clippy::expect_used)]
static END_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^\s*end at (.*)$").expect("hardcoded regex pattern is valid")
});

#[expect(clippy::expect_used)]
static OPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mi)^(\w+) is (\d+)[ \t\r]*$").expect("hardcoded regex pattern is valid")
});

/// Errors raised while assembling the run configuration.
///
/// All of them are fatal and happen before any page is fetched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("no start page given (add a line 'start at <Page>' or pass --start)")]
    MissingStart,

    #[error("no end page given (add a line 'end at <Page>' or pass --end)")]
    MissingEnd,

    #[error("invalid value '{value}' for option '{name}': {reason}")]
    InvalidOption {
        name: String,
        value: String,
        reason: String,
    },
}

/// Numeric options of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Depth bound of the search.
    pub max_depth: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// What a config file says, before command-line overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub start: Option<String>,
    pub end: Option<String>,
    pub max_depth: Option<usize>,
}

impl ConfigFile {
    /// Parse config file content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if a known option carries a
    /// value that does not fit. Unknown options are logged and ignored.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config = Self {
            start: capture_line(&START_REGEX, content),
            end: capture_line(&END_REGEX, content),
            max_depth: None,
        };

        for caps in OPTION_REGEX.captures_iter(content) {
            let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let (name, value) = (name.as_str(), value.as_str());

            if name.eq_ignore_ascii_case("maxDepth") {
                let depth = value.parse::<usize>().map_err(|e| ConfigError::InvalidOption {
                    name: name.to_string(),
                    value: value.to_string(),
                    reason: e.to_string(),
                })?;
                config.max_depth = Some(depth);
            } else {
                warn!(option = name, value, "ignoring unknown config option");
            }
        }

        Ok(config)
    }

    /// Read and parse the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFailed`] if the file cannot be read, or
    /// any error of [`parse`](Self::parse).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::parse(&content)
    }
}

/// Everything a run needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub start: String,
    pub end: String,
    pub options: RunOptions,
}

impl RunConfig {
    /// Combine a parsed file with command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingStart`] or [`ConfigError::MissingEnd`]
    /// when neither source names that end of the search.
    pub fn resolve(file: ConfigFile, cli: &Cli) -> Result<Self, ConfigError> {
        let start = non_empty(cli.start.clone())
            .or(file.start)
            .ok_or(ConfigError::MissingStart)?;
        let end = non_empty(cli.end.clone())
            .or(file.end)
            .ok_or(ConfigError::MissingEnd)?;
        let max_depth = cli
            .max_depth
            .or(file.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH);

        Ok(Self {
            start,
            end,
            options: RunOptions { max_depth },
        })
    }

    /// Build the run configuration for a command line, falling back to
    /// [`DEFAULT_CONFIG_PATH`] in the working directory.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`].
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_cli_with_default(cli, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Build the run configuration for a command line.
    ///
    /// The file named by `--config` must exist. Without `--config`,
    /// `default_path` is read when present; it may be absent only if the
    /// command line names both the start and the end page.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`].
    pub fn from_cli_with_default(cli: &Cli, default_path: &Path) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => ConfigFile::load(path)?,
            None if default_path.exists() || !cli.has_endpoints() => {
                ConfigFile::load(default_path)?
            }
            None => {
                debug!(path = %default_path.display(), "no config file, using command line only");
                ConfigFile::default()
            }
        };
        Self::resolve(file, cli)
    }
}

fn capture_line(regex: &Regex, content: &str) -> Option<String> {
    regex
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
