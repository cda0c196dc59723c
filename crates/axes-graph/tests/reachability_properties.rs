//! Property tests for the reachability closure

use axes_artifact::{ArtifactNode, RelationshipEdge};
use axes_graph::{reachable_from, AdjacencyIndex, EdgeOrientation};
use axes_test_utils::{edge, named};
use proptest::prelude::*;
use std::collections::{BTreeSet, HashSet};

fn graph() -> impl Strategy<Value = (Vec<ArtifactNode>, Vec<RelationshipEdge>)> {
    (1..12usize).prop_flat_map(|n| {
        let edges = proptest::collection::vec((0..n + 2, 0..n + 2), 0..30);
        (Just(n), edges).prop_map(|(n, pairs)| {
            let nodes: Vec<ArtifactNode> = (0..n).map(|i| named(&format!("n{i}"))).collect();
            // indices >= n name missing nodes
            let edges: Vec<RelationshipEdge> = pairs
                .into_iter()
                .map(|(s, t)| edge(&format!("n{s}"), &format!("n{t}")))
                .collect();
            (nodes, edges)
        })
    })
}

/// Reference closure: repeat until no edge adds a node
fn naive_closure(
    nodes: &[ArtifactNode],
    edges: &[RelationshipEdge],
    seeds: &[&str],
    directed: bool,
) -> BTreeSet<String> {
    let known: HashSet<&str> = nodes.iter().map(|n| n.id().as_str()).collect();
    let mut reached: BTreeSet<String> = seeds.iter().map(|s| (*s).to_string()).collect();
    loop {
        let before = reached.len();
        for e in edges {
            let (s, t) = (e.source.as_str(), e.target.as_str());
            if !known.contains(s) || !known.contains(t) {
                continue;
            }
            if reached.contains(s) {
                reached.insert(t.to_string());
            }
            if !directed && reached.contains(t) {
                reached.insert(s.to_string());
            }
        }
        if reached.len() == before {
            return reached;
        }
    }
}

proptest! {
    #[test]
    fn prop_traversal_matches_fixpoint_closure(
        (nodes, edges) in graph(),
        seed_mask in proptest::collection::vec(any::<bool>(), 12),
        directed in any::<bool>(),
    ) {
        let orientation = EdgeOrientation::from_directed(directed);
        let (lookup, index) = AdjacencyIndex::from_nodes(&nodes, &edges, orientation);
        let seeds: Vec<&ArtifactNode> = lookup
            .iter()
            .zip(seed_mask.iter())
            .filter(|(_, pick)| **pick)
            .map(|(n, _)| n)
            .collect();
        let seed_ids: Vec<&str> = seeds.iter().map(|n| n.id().as_str()).collect();

        let reached: BTreeSet<String> = reachable_from(&index, &seeds)
            .keys()
            .map(|k| (*k).to_string())
            .collect();
        prop_assert_eq!(reached, naive_closure(&nodes, &edges, &seed_ids, directed));
    }

    #[test]
    fn prop_undirected_index_is_symmetric((nodes, edges) in graph()) {
        let (lookup, index) =
            AdjacencyIndex::from_nodes(&nodes, &edges, EdgeOrientation::Undirected);
        for node in lookup.iter() {
            let id = node.id().as_str();
            for neighbor in index.neighbors(id) {
                prop_assert!(index
                    .neighbors(neighbor.id().as_str())
                    .iter()
                    .any(|back| back.id().as_str() == id));
            }
        }
    }

    #[test]
    fn prop_every_node_has_an_entry((nodes, edges) in graph()) {
        let (lookup, index) = AdjacencyIndex::from_nodes(&nodes, &edges, EdgeOrientation::Directed);
        prop_assert_eq!(index.len(), lookup.len());
        prop_assert_eq!(index.edge_count() + index.dropped_edges(), edges.len());
    }
}
