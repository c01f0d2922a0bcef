//! Where neighbors come from.
//!
//! The explorer never talks to the network itself. It asks a
//! [`NeighborSource`] for the outgoing links of one page at a time and
//! awaits the answer before doing anything else.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Error;
use crate::result::Result;

/// Supplies the ordered outgoing links of a page.
///
/// Implementations must return links in a stable order for a given page,
/// since the explorer visits them in that order and stops at the first match.
#[async_trait]
pub trait NeighborSource: Send + Sync {
    /// Links of the page named `id`, in page order.
    ///
    /// # Errors
    ///
    /// [`Error::Fetch`] if the page cannot be retrieved, [`Error::Parse`] if
    /// its content cannot be interpreted. Either error aborts the run.
    async fn neighbors(&self, id: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl<T: NeighborSource + ?Sized> NeighborSource for &T {
    async fn neighbors(&self, id: &str) -> Result<Vec<String>> {
        (**self).neighbors(id).await
    }
}

#[async_trait]
impl<T: NeighborSource + ?Sized> NeighborSource for Box<T> {
    async fn neighbors(&self, id: &str) -> Result<Vec<String>> {
        (**self).neighbors(id).await
    }
}

/// A fixed link graph held in memory.
///
/// Pages without an entry have no links. Every lookup is recorded, which
/// makes it easy to check which pages a run actually expanded.
#[derive(Debug, Default)]
pub struct MemorySource {
    links: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    log: Mutex<Vec<String>>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the links of `page`, replacing any previous ones.
    #[must_use]
    pub fn with_links<I, S>(mut self, page: impl Into<String>, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links
            .insert(page.into(), links.into_iter().map(Into::into).collect());
        self
    }

    /// Make every lookup of `page` fail with a fetch error.
    #[must_use]
    pub fn failing_on(mut self, page: impl Into<String>) -> Self {
        self.failing.insert(page.into());
        self
    }

    /// Pages looked up so far, in lookup order.
    #[must_use]
    pub fn fetched(&self) -> Vec<String> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl NeighborSource for MemorySource {
    async fn neighbors(&self, id: &str) -> Result<Vec<String>> {
        if let Ok(mut log) = self.log.lock() {
            log.push(id.to_string());
        }

        if self.failing.contains(id) {
            return Err(Error::fetch(id, "page unavailable"));
        }

        Ok(self.links.get(id).cloned().unwrap_or_default())
    }
}
