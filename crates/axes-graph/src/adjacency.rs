//! Node lookup and adjacency index
//!
//! Both structures borrow the caller's node slice for the duration of one
//! query. They are rebuilt on every call and never cached, so an edited
//! canvas can never be answered from a stale index.

use axes_artifact::{ArtifactNode, RelationshipEdge};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Whether edges are followed only forwards or in both directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeOrientation {
    /// `source -> target` only
    Directed,
    /// `source <-> target`
    #[default]
    Undirected,
}

impl EdgeOrientation {
    /// Orientation from a `directed` flag
    #[inline]
    #[must_use]
    pub const fn from_directed(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }

    /// Whether edges are one-way
    #[inline]
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }
}

/// Id → node map over a borrowed node slice
///
/// Keeps the slice order. A repeated id keeps its first position and the
/// last node carrying it.
#[derive(Debug, Clone, Default)]
pub struct NodeLookup<'a> {
    by_id: IndexMap<&'a str, &'a ArtifactNode>,
}

impl<'a> NodeLookup<'a> {
    /// Index nodes by id
    #[must_use]
    pub fn new(nodes: &'a [ArtifactNode]) -> Self {
        let mut by_id = IndexMap::with_capacity(nodes.len());
        for node in nodes {
            by_id.insert(node.id().as_str(), node);
        }
        Self { by_id }
    }

    /// Node with the given id
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a ArtifactNode> {
        self.by_id.get(id).copied()
    }

    /// Whether the id is known
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of distinct ids
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Whether no nodes are known
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Nodes in slice order
    pub fn iter(&self) -> impl Iterator<Item = &'a ArtifactNode> + '_ {
        self.by_id.values().copied()
    }
}

/// Id → ordered neighbour list
///
/// # Invariants
/// - Every node of the lookup has an entry, possibly empty
/// - An edge with an endpoint missing from the lookup contributes nothing
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<'a> {
    adjacency: IndexMap<&'a str, Vec<&'a ArtifactNode>>,
    orientation: EdgeOrientation,
    edge_count: usize,
    dropped_edges: usize,
}

impl<'a> AdjacencyIndex<'a> {
    /// Build the index for one query
    #[must_use]
    pub fn build(
        lookup: &NodeLookup<'a>,
        edges: &[RelationshipEdge],
        orientation: EdgeOrientation,
    ) -> Self {
        let mut adjacency: IndexMap<&'a str, Vec<&'a ArtifactNode>> = lookup
            .iter()
            .map(|node| (node.id().as_str(), Vec::new()))
            .collect();
        let mut edge_count = 0;
        let mut dropped_edges = 0;

        for edge in edges {
            let (Some(source), Some(target)) = (
                lookup.get(edge.source.as_str()),
                lookup.get(edge.target.as_str()),
            ) else {
                dropped_edges += 1;
                continue;
            };

            if let Some(neighbors) = adjacency.get_mut(source.id().as_str()) {
                neighbors.push(target);
            }
            if !orientation.is_directed() {
                if let Some(neighbors) = adjacency.get_mut(target.id().as_str()) {
                    neighbors.push(source);
                }
            }
            edge_count += 1;
        }

        tracing::debug!(
            "built adjacency index: {} nodes, {} edges, {} dropped, {:?}",
            adjacency.len(),
            edge_count,
            dropped_edges,
            orientation
        );

        Self {
            adjacency,
            orientation,
            edge_count,
            dropped_edges,
        }
    }

    /// Build lookup and index together from a node slice
    #[must_use]
    pub fn from_nodes(
        nodes: &'a [ArtifactNode],
        edges: &[RelationshipEdge],
        orientation: EdgeOrientation,
    ) -> (NodeLookup<'a>, Self) {
        let lookup = NodeLookup::new(nodes);
        let index = Self::build(&lookup, edges, orientation);
        (lookup, index)
    }

    /// Neighbours of a node, empty for unknown ids
    #[inline]
    #[must_use]
    pub fn neighbors(&self, id: &str) -> &[&'a ArtifactNode] {
        match self.adjacency.get(id) {
            Some(neighbors) => neighbors,
            None => &[],
        }
    }

    /// Whether the node has an entry
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Number of node entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the index has no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Edges that resolved to two known nodes
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Edges skipped because an endpoint was unknown
    #[inline]
    #[must_use]
    pub fn dropped_edges(&self) -> usize {
        self.dropped_edges
    }

    /// Orientation the index was built with
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> EdgeOrientation {
        self.orientation
    }
}
