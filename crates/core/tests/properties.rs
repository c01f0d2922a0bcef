//! Property tests for the search tree invariants over random link graphs.

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use std::collections::HashSet;

use futures::executor::block_on;
use proptest::prelude::*;
use wikidart_core::{Explorer, MemorySource, NodeId, Result, SearchTree};

const PAGES: usize = 8;

fn page(index: usize) -> String {
    format!("P{index}")
}

/// Links of every page as indices into `0..PAGES`, duplicates and self
/// links included.
fn link_graph() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0..PAGES, 0..5), PAGES)
}

fn source_for(graph: &[Vec<usize>]) -> MemorySource {
    graph
        .iter()
        .enumerate()
        .fold(MemorySource::new(), |source, (from, links)| {
            source.with_links(page(from), links.iter().map(|to| page(*to)))
        })
}

fn search(
    graph: &[Vec<usize>],
    target: usize,
    bound: usize,
) -> (MemorySource, SearchTree, Result<Option<NodeId>>) {
    let source = source_for(graph);
    let mut tree = SearchTree::new(page(0));
    let result = block_on(Explorer::new(&mut tree, &source, page(target)).run(bound));
    (source, tree, result)
}

proptest! {
    #[test]
    fn prop_values_are_unique(graph in link_graph(), target in 0..PAGES + 2, bound in 0..6usize) {
        let (_, tree, _) = search(&graph, target, bound);

        let distinct: HashSet<&str> = tree.iter().map(|(_, node)| node.value()).collect();
        prop_assert_eq!(distinct.len(), tree.len());
    }

    #[test]
    fn prop_depth_follows_parent(graph in link_graph(), target in 0..PAGES + 2, bound in 0..6usize) {
        let (_, tree, _) = search(&graph, target, bound);

        prop_assert_eq!(tree.root().depth(), 0);
        prop_assert_eq!(tree.iter().filter(|(_, node)| node.is_root()).count(), 1);
        for (_, node) in tree.iter().filter(|(_, node)| !node.is_root()) {
            let parent = tree.node(node.parent().unwrap()).unwrap();
            prop_assert_eq!(node.depth(), parent.depth() + 1);
        }
    }

    #[test]
    fn prop_found_path_is_valid(graph in link_graph(), target in 0..PAGES + 2, bound in 0..6usize) {
        let (_, tree, result) = search(&graph, target, bound);

        if let Some(found) = result.unwrap() {
            let path = tree.reconstruct_path(found).unwrap();
            prop_assert_eq!(path[0].value(), tree.root().value());
            prop_assert_eq!(path[path.len() - 1].value(), page(target));
            for (depth, pair) in path.windows(2).enumerate() {
                prop_assert_eq!(pair[0].depth(), depth);
                let child = tree.find(pair[1].value()).unwrap();
                prop_assert!(pair[0].children().unwrap().contains(&child));
            }
        }
    }

    #[test]
    fn prop_bound_is_respected(graph in link_graph(), target in 0..PAGES + 2, bound in 0..6usize) {
        let (source, tree, _) = search(&graph, target, bound);

        let fetched = source.fetched();
        let distinct: HashSet<&String> = fetched.iter().collect();
        prop_assert_eq!(distinct.len(), fetched.len());
        for value in &fetched {
            let node = tree.node(tree.find(value).unwrap()).unwrap();
            prop_assert!(node.depth() < bound);
            prop_assert!(node.is_expanded());
        }
    }

    #[test]
    fn prop_runs_are_deterministic(graph in link_graph(), target in 0..PAGES + 2, bound in 0..6usize) {
        let (first_source, first_tree, first) = search(&graph, target, bound);
        let (second_source, second_tree, second) = search(&graph, target, bound);

        prop_assert_eq!(first.unwrap(), second.unwrap());
        prop_assert_eq!(first_source.fetched(), second_source.fetched());
        let shape = |tree: &SearchTree| {
            tree.iter()
                .map(|(id, node)| (id, node.value().to_string(), node.parent(), node.children().map(<[NodeId]>::to_vec)))
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(shape(&first_tree), shape(&second_tree));
    }
}
