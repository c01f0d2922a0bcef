//! Human- and machine-readable run output.
//!
//! Tables are tab-separated rows framed by dashed rules, titles are upper
//! case. In JSON mode only the final result is written, as one object.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;
use tracing::warn;
use wikidart_core::{Node, Observer, PathStep};

use crate::config::RunConfig;

const WELCOME: &str = "Welcome to Wikidart!";
const SUCCESS: &str = "Search Successful";
const FAILURE: &str = "Search Unsuccessful";

/// How the final result is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Final outcome of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub found: bool,
    pub elapsed_secs: f64,
    pub fetches: usize,
    pub path: Vec<PathStep>,
}

impl SearchReport {
    /// A run that reached the target along `path`.
    #[must_use]
    pub fn found(path: Vec<PathStep>, elapsed: Duration, fetches: usize) -> Self {
        Self {
            found: true,
            elapsed_secs: elapsed.as_secs_f64(),
            fetches,
            path,
        }
    }

    /// A run that exhausted its bound without reaching the target.
    #[must_use]
    pub fn not_found(elapsed: Duration, fetches: usize) -> Self {
        Self {
            found: false,
            elapsed_secs: elapsed.as_secs_f64(),
            fetches,
            path: Vec::new(),
        }
    }
}

/// Writes run progress and results to `out`.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Banner with both ends of the search and the run options.
    ///
    /// # Errors
    ///
    /// Any error writing to the output.
    pub fn welcome(&mut self, config: &RunConfig) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }

        self.nl()?;
        self.title(WELCOME)?;
        self.row(&["START", "END"])?;
        self.row(&[config.start.as_str(), config.end.as_str()])?;
        self.rule(WELCOME.len())?;
        self.title("Options")?;
        self.row(&["maxDepth"])?;
        self.row(&[config.options.max_depth.to_string().as_str()])?;
        self.rule(WELCOME.len())
    }

    /// Final result block, or the JSON object in JSON mode.
    ///
    /// # Errors
    ///
    /// Any error writing to the output or serializing the report.
    pub fn finish(&mut self, report: &SearchReport) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, report)?;
                writeln!(self.out)
            }
            OutputFormat::Table if report.found => self.success(report),
            OutputFormat::Table => self.failure(report),
        }
    }

    fn success(&mut self, report: &SearchReport) -> io::Result<()> {
        self.nl()?;
        self.rule(SUCCESS.len())?;
        self.title(SUCCESS)?;
        self.runtime(report)?;
        self.rule(SUCCESS.len())?;
        self.nl()?;
        self.title("Found Path")?;
        self.row(&["DEPTH", "LINK"])?;
        for step in &report.path {
            self.row(&[step.depth.to_string().as_str(), step.value.as_str()])?;
        }
        self.rule(SUCCESS.len())
    }

    fn failure(&mut self, report: &SearchReport) -> io::Result<()> {
        self.rule(FAILURE.len())?;
        self.title(FAILURE)?;
        self.runtime(report)?;
        self.rule(FAILURE.len())
    }

    fn runtime(&mut self, report: &SearchReport) -> io::Result<()> {
        self.row(&["RUNTIME", "FETCHES"])?;
        self.row(&[
            format!("{:.2}s", report.elapsed_secs).as_str(),
            report.fetches.to_string().as_str(),
        ])
    }

    fn nl(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    fn rule(&mut self, length: usize) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(length))
    }

    fn row(&mut self, entries: &[&str]) -> io::Result<()> {
        writeln!(self.out, "{}", entries.join("\t"))
    }

    fn title(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text.to_uppercase())
    }
}

impl<W: Write> Observer for Reporter<W> {
    fn stage_started(&mut self, stage: usize, _frontier: usize) {
        if self.format == OutputFormat::Json {
            return;
        }

        let title = format!("Starting search at depth {stage}");
        let written = self
            .nl()
            .and_then(|()| self.title(&title))
            .and_then(|()| self.rule(title.len()))
            .and_then(|()| self.row(&["DEPTH", "LINK"]));
        if let Err(err) = written {
            warn!(error = %err, "failed to write progress");
        }
    }

    fn expanding(&mut self, stage: usize, node: &Node) {
        if self.format == OutputFormat::Json {
            return;
        }

        if let Err(err) = self.row(&[stage.to_string().as_str(), node.value()]) {
            warn!(error = %err, "failed to write progress");
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use wikidart_core::SearchTree;

    use super::*;
    use crate::config::RunOptions;

    fn config() -> RunConfig {
        RunConfig {
            start: "Cat".to_string(),
            end: "Dog".to_string(),
            options: RunOptions { max_depth: 3 },
        }
    }

    fn render(format: OutputFormat, f: impl FnOnce(&mut Reporter<Vec<u8>>)) -> String {
        let mut reporter = Reporter::new(Vec::new(), format);
        f(&mut reporter);
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn welcome_lists_ends_and_options() {
        let out = render(OutputFormat::Table, |r| r.welcome(&config()).unwrap());

        assert_eq!(
            out,
            "\nWELCOME TO WIKIDART!\nSTART\tEND\nCat\tDog\n--------------------\nOPTIONS\nmaxDepth\n3\n--------------------\n"
        );
    }

    #[test]
    fn success_prints_runtime_and_path() {
        let report = SearchReport::found(
            vec![PathStep::new(0, "Cat"), PathStep::new(1, "Dog")],
            Duration::from_millis(1234),
            1,
        );
        let out = render(OutputFormat::Table, |r| r.finish(&report).unwrap());

        assert!(out.contains("SEARCH SUCCESSFUL\nRUNTIME\tFETCHES\n1.23s\t1\n"));
        assert!(out.contains("FOUND PATH\nDEPTH\tLINK\n0\tCat\n1\tDog\n-----------------\n"));
    }

    #[test]
    fn failure_prints_runtime_only() {
        let report = SearchReport::not_found(Duration::from_millis(50), 7);
        let out = render(OutputFormat::Table, |r| r.finish(&report).unwrap());

        assert_eq!(
            out,
            "-------------------\nSEARCH UNSUCCESSFUL\nRUNTIME\tFETCHES\n0.05s\t7\n-------------------\n"
        );
    }

    #[test]
    fn progress_rows_follow_stage_header() {
        let tree = SearchTree::new("Cat");
        let out = render(OutputFormat::Table, |r| {
            r.stage_started(1, 1);
            r.expanding(1, tree.root());
        });

        assert_eq!(
            out,
            "\nSTARTING SEARCH AT DEPTH 1\n--------------------------\nDEPTH\tLINK\n1\tCat\n"
        );
    }

    #[test]
    fn json_mode_writes_only_the_result() {
        let tree = SearchTree::new("Cat");
        let report = SearchReport::found(vec![PathStep::new(0, "Cat")], Duration::ZERO, 0);
        let out = render(OutputFormat::Json, |r| {
            r.welcome(&config()).unwrap();
            r.stage_started(1, 1);
            r.expanding(1, tree.root());
            r.finish(&report).unwrap();
        });

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["found"], true);
        assert_eq!(value["fetches"], 0);
        assert_eq!(value["path"][0]["value"], "Cat");
        assert_eq!(value["path"][0]["depth"], 0);
    }
}
