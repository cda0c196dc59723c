//! Multi-source reachability
//!
//! Iterative depth-first traversal over an [`AdjacencyIndex`], seeded from
//! every start node at once. An explicit stack keeps deep chains off the
//! call stack.

use crate::adjacency::AdjacencyIndex;
use axes_artifact::ArtifactNode;
use indexmap::IndexMap;

/// Every node reachable from any seed, seeds included, in discovery order
///
/// Seeds are visited in the order given; neighbours in adjacency order.
/// A node reachable from several seeds appears once.
#[must_use]
pub fn reachable_from<'a>(
    index: &AdjacencyIndex<'a>,
    seeds: &[&'a ArtifactNode],
) -> IndexMap<&'a str, &'a ArtifactNode> {
    let mut visited: IndexMap<&'a str, &'a ArtifactNode> = IndexMap::new();
    // reversed so the first seed is popped first
    let mut to_visit: Vec<&'a ArtifactNode> = seeds.iter().rev().copied().collect();

    while let Some(node) = to_visit.pop() {
        let id = node.id().as_str();
        if visited.contains_key(id) {
            continue;
        }
        visited.insert(id, node);

        for &neighbor in index.neighbors(id).iter().rev() {
            if !visited.contains_key(neighbor.id().as_str()) {
                to_visit.push(neighbor);
            }
        }
    }

    tracing::trace!(
        "traversal from {} seeds reached {} nodes",
        seeds.len(),
        visited.len()
    );
    visited
}
