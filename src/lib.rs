#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Wikidart
//!
//! Find a chain of links from one encyclopedia page to another.
//!
//! The search engine lives in [`wikidart_core`]; this crate adds what a run
//! needs around it: the command line, the config file, fetching pages over
//! HTTP, and printing the result.

pub use wikidart_core;

pub mod cli;
pub mod config;
pub mod report;
pub mod run;
pub mod wiki;

pub use run::run_search;
