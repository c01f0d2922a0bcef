//! Progress hooks for a running search.

use crate::node::Node;

/// Receives progress notifications from an [`Explorer`](crate::Explorer).
///
/// Both hooks default to doing nothing. They are informational only: an
/// observer cannot influence the search.
pub trait Observer {
    /// A new stage begins; `frontier` holds the nodes it will expand.
    fn stage_started(&mut self, _stage: usize, _frontier: usize) {}

    /// A frontier node is about to be expanded within `stage`.
    fn expanding(&mut self, _stage: usize, _node: &Node) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {}
