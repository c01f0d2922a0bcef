//! Nodes of the traversal tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Handle to a node stored in a [`SearchTree`](crate::SearchTree).
///
/// Handles are plain indices: they do not own the node and are only
/// meaningful for the tree that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in insertion order (the root is 0).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One discovered page.
///
/// `depth` is the distance from the root along the path the page was first
/// discovered on, not the shortest distance in the link graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: String,
    depth: usize,
    parent: Option<NodeId>,
    children: Option<Vec<NodeId>>,
}

impl Node {
    pub(crate) fn root(value: String) -> Self {
        Self {
            value,
            depth: 0,
            parent: None,
            children: None,
        }
    }

    pub(crate) fn child_of(parent: NodeId, parent_depth: usize, value: String) -> Self {
        Self {
            value,
            depth: parent_depth.saturating_add(1),
            parent: Some(parent),
            children: None,
        }
    }

    /// The page identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The node that discovered this one; `None` only for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children attached by the node's expansion, `None` until expanded.
    #[must_use]
    pub fn children(&self) -> Option<&[NodeId]> {
        self.children.as_deref()
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn set_children(&mut self, children: Vec<NodeId>) {
        self.children = Some(children);
    }

    /// Snapshot of this node as a step of a found path.
    #[must_use]
    pub fn step(&self) -> PathStep {
        PathStep {
            depth: self.depth,
            value: self.value.clone(),
        }
    }
}

/// A `(depth, value)` pair of a reconstructed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub depth: usize,
    pub value: String,
}

impl PathStep {
    pub fn new(depth: usize, value: impl Into<String>) -> Self {
        Self {
            depth,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_is_one_deeper_than_parent() {
        let child = Node::child_of(NodeId::from_index(3), 2, "Lisp".to_string());
        assert_eq!(child.depth(), 3);
        assert_eq!(child.parent(), Some(NodeId::from_index(3)));
        assert!(!child.is_expanded());
        assert!(!child.is_root());
    }

    #[test]
    fn expansion_with_no_links_still_counts_as_expanded() {
        let mut root = Node::root("Orphan".to_string());
        root.set_children(Vec::new());
        assert!(root.is_expanded());
        assert_eq!(root.children(), Some(&[][..]));
    }

    #[test]
    fn step_copies_depth_and_value() {
        let root = Node::root("Main_Page".to_string());
        assert_eq!(root.step(), PathStep::new(0, "Main_Page"));
    }
}
