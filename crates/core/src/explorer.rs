//! The staged, depth-bounded search driver.
//!
//! A run is a sequence of stages `1..=max_depth`. Stage `s` takes the
//! frontier [`SearchTree::level_at(s)`](SearchTree::level_at), i.e. the nodes
//! at tree depth `s - 1`, and expands each of them depth-first down to tree
//! depth `s`. Expansion fetches a node's links once; later descents through
//! the same node reuse the attached children.
//!
//! The first node whose value equals the target ends the run. Errors from the
//! neighbor source end it too, unmodified.

use tracing::{debug, info, warn};

use crate::node::NodeId;
use crate::observer::Observer;
use crate::result::Result;
use crate::source::NeighborSource;
use crate::tree::SearchTree;

/// Depth bound used when a run does not configure one.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Drives one search over a [`SearchTree`].
pub struct Explorer<'a, S: NeighborSource + ?Sized> {
    tree: &'a mut SearchTree,
    source: &'a S,
    target: String,
    observer: Option<&'a mut dyn Observer>,
    fetches: usize,
}

impl<'a, S: NeighborSource + ?Sized> Explorer<'a, S> {
    /// Search `tree` for `target`, expanding pages through `source`.
    pub fn new(tree: &'a mut SearchTree, source: &'a S, target: impl Into<String>) -> Self {
        Self {
            tree,
            source,
            target: target.into(),
            observer: None,
            fetches: 0,
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: &'a mut dyn Observer) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Number of neighbor lookups performed so far.
    #[must_use]
    pub const fn fetches(&self) -> usize {
        self.fetches
    }

    /// Run the staged search with depth bound `max_depth`.
    ///
    /// Returns the node matching the target, or `None` once the stages are
    /// exhausted or a stage has no frontier. A root that already matches is
    /// returned without any lookup, whatever the bound.
    ///
    /// # Errors
    ///
    /// Any error raised by the neighbor source, as raised.
    pub async fn run(&mut self, max_depth: usize) -> Result<Option<NodeId>> {
        if self.tree.root().value() == self.target {
            info!(target_page = %self.target, "start page is the target");
            return Ok(Some(SearchTree::ROOT));
        }

        for stage in 1..=max_depth {
            let Some(frontier) = self.tree.level_at(stage) else {
                info!(stage, "no frontier left, stopping");
                return Ok(None);
            };

            info!(stage, frontier = frontier.len(), "starting search at depth");
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.stage_started(stage, frontier.len());
            }

            for id in frontier {
                if let (Some(observer), Some(node)) =
                    (self.observer.as_deref_mut(), self.tree.node(id))
                {
                    observer.expanding(stage, node);
                }

                if let Some(found) = self.expand(id, stage).await? {
                    info!(stage, fetches = self.fetches, "target found");
                    return Ok(Some(found));
                }
            }
        }

        info!(max_depth, fetches = self.fetches, "depth bound exhausted");
        Ok(None)
    }

    /// Depth-first expansion of the subtree under `start`, bounded by `bound`.
    ///
    /// Visits nodes in pre-order with children in link order, which is the
    /// order a recursive descent would take. A node is tested against the
    /// target before the depth cutoff, so a target sitting exactly at the
    /// bound is still found.
    async fn expand(&mut self, start: NodeId, bound: usize) -> Result<Option<NodeId>> {
        let mut stack = vec![start];

        while let Some(id) = stack.pop() {
            let (depth, cached) = {
                let node = self.tree.get(id)?;
                if node.value() == self.target {
                    return Ok(Some(id));
                }
                (node.depth(), node.children().map(<[NodeId]>::to_vec))
            };

            if depth >= bound {
                continue;
            }

            let children = match cached {
                Some(children) => children,
                None => self.fetch_children(id).await?,
            };
            stack.extend(children.into_iter().rev());
        }

        Ok(None)
    }

    async fn fetch_children(&mut self, id: NodeId) -> Result<Vec<NodeId>> {
        let page = self.tree.get(id)?.value().to_string();
        debug!(page = %page, "fetching neighbors");

        self.fetches = self.fetches.saturating_add(1);
        let links = self
            .source
            .neighbors(&page)
            .await
            .inspect_err(|err| warn!(page = %page, error = %err, "neighbor lookup failed"))?;

        self.tree.attach_children(id, links)
    }
}
