//! The traversal tree.
//!
//! [`SearchTree`] is the single owner of every discovered page. Nodes live in
//! an arena in insertion order and refer to each other through [`NodeId`]
//! handles, so the parent links used for path reconstruction never own
//! anything.
//!
//! Two rules hold after every insertion:
//!
//! - no two nodes share a `value`, anywhere in the tree;
//! - every non-root node sits exactly one level below its parent.

use std::collections::HashMap;

use tracing::debug;

use crate::error::Error;
use crate::node::{Node, NodeId, PathStep};
use crate::result::Result;

/// Tree of every page discovered during one run.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl SearchTree {
    /// Handle of the root node of every tree.
    pub const ROOT: NodeId = NodeId::from_index(0);

    /// Create a tree holding only the root page, at depth 0.
    pub fn new(root_value: impl Into<String>) -> Self {
        let root_value = root_value.into();
        let mut index = HashMap::new();
        index.insert(root_value.clone(), Self::ROOT);

        Self {
            nodes: vec![Node::root(root_value)],
            index,
        }
    }

    #[must_use]
    #[allow(clippy::indexing_slicing)] // the arena is never empty: it is created with its root
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Like [`node`](Self::node), but a foreign handle is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `id` was not issued by this tree.
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        self.node(id).ok_or(Error::UnknownNode(id))
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a tree holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_index(i), node))
    }

    /// Whether any node in the tree carries `value`.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.index.contains_key(value)
    }

    #[must_use]
    pub fn find(&self, value: &str) -> Option<NodeId> {
        self.index.get(value).copied()
    }

    /// Attach the result of expanding `parent`.
    ///
    /// One child is built per candidate, in candidate order, one level below
    /// `parent`. Candidates already present anywhere in the tree are dropped,
    /// and so are repeats within `candidates` itself. Returns the handles of
    /// the children that were attached (possibly none).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] for a foreign handle and
    /// [`Error::AlreadyExpanded`] if `parent` already has children attached.
    pub fn attach_children<I>(&mut self, parent: NodeId, candidates: I) -> Result<Vec<NodeId>>
    where
        I: IntoIterator<Item = String>,
    {
        let (parent_depth, parent_value) = {
            let node = self.get(parent)?;
            if node.is_expanded() {
                return Err(Error::AlreadyExpanded {
                    value: node.value().to_string(),
                });
            }
            (node.depth(), node.value().to_string())
        };

        let mut attached = Vec::new();
        let mut rejected = 0_usize;

        for value in candidates {
            if self.index.contains_key(&value) {
                rejected = rejected.saturating_add(1);
                continue;
            }
            let id = NodeId::from_index(self.nodes.len());
            self.index.insert(value.clone(), id);
            self.nodes.push(Node::child_of(parent, parent_depth, value));
            attached.push(id);
        }

        if let Some(node) = self.nodes.get_mut(parent.index()) {
            node.set_children(attached.clone());
        }

        debug!(
            page = %parent_value,
            attached = attached.len(),
            rejected,
            "attached children"
        );

        Ok(attached)
    }

    /// The level enumeration of the tree.
    ///
    /// Entry 0 is `[root]`; entry `k + 1` is the children of entry `k`,
    /// concatenated in order. Stops before the first empty level, so every
    /// entry is non-empty.
    #[must_use]
    pub fn levels(&self) -> Vec<Vec<NodeId>> {
        let mut levels = vec![vec![Self::ROOT]];

        loop {
            let next: Vec<NodeId> = levels
                .last()
                .into_iter()
                .flatten()
                .filter_map(|id| self.node(*id))
                .flat_map(|node| node.children().unwrap_or_default().iter().copied())
                .collect();

            if next.is_empty() {
                return levels;
            }
            levels.push(next);
        }
    }

    /// The frontier for stage `depth`: entry `depth - 1` of [`levels`](Self::levels).
    ///
    /// Note the shift: `level_at(1)` is `[root]`, `level_at(2)` the root's
    /// children, and in general the nodes whose expansion reaches tree depth
    /// `depth`. Returns `None` for `depth == 0` and past the deepest level.
    #[must_use]
    pub fn level_at(&self, depth: usize) -> Option<Vec<NodeId>> {
        let entry = depth.checked_sub(1)?;
        self.levels().into_iter().nth(entry)
    }

    /// The nodes from the root down to `node`, root first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `node` was not issued by this tree.
    pub fn reconstruct_path(&self, node: NodeId) -> Result<Vec<&Node>> {
        let mut path = Vec::new();
        let mut current = Some(node);

        while let Some(id) = current {
            let node = self.get(id)?;
            path.push(node);
            current = node.parent();
        }

        path.reverse();
        Ok(path)
    }

    /// [`reconstruct_path`](Self::reconstruct_path) as `(depth, value)` steps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if `node` was not issued by this tree.
    pub fn path_steps(&self, node: NodeId) -> Result<Vec<PathStep>> {
        Ok(self
            .reconstruct_path(node)?
            .into_iter()
            .map(Node::step)
            .collect())
    }
}
