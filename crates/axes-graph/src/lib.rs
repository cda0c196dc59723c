//! Axes Relationship Graph
//!
//! Answers free-text relationship questions over an artifact canvas: which
//! artifacts match the query, and everything connected to them.
//!
//! # Overview
//!
//! - [`NodeLookup`]: Id → node map over a borrowed snapshot
//! - [`AdjacencyIndex`]: Id → ordered neighbours, directed or undirected
//! - [`reachable_from`]: Multi-source traversal with an explicit stack
//! - [`RelationshipGraphEngine`]: Parse, seed, traverse
//!
//! All structures borrow the caller's snapshot and are rebuilt per query.
//!
//! # Example
//!
//! ```rust
//! use axes_artifact::{ArtifactNode, RelationshipEdge, ResourceArtifact, ResourceType, ResourceVariant};
//! use axes_graph::{NodeLookup, RelationshipGraphEngine};
//!
//! let app = |name: &str| {
//!     ArtifactNode::resource(
//!         name,
//!         "contoso",
//!         ResourceArtifact { resource_type: ResourceType::Production, variant: ResourceVariant::App },
//!     )
//!     .unwrap()
//! };
//! let nodes = vec![app("web"), app("db"), app("cache")];
//! let edges = vec![RelationshipEdge::connect(&nodes[0], &nodes[1])];
//!
//! let engine = RelationshipGraphEngine::new();
//! let lookup = NodeLookup::new(&nodes);
//! let index = engine.build_index(&lookup, &edges);
//! let result = engine.query(&index, &lookup, "name = web");
//!
//! assert_eq!(result.len(), 2);
//! assert!(!result.contains(nodes[2].id().as_str()));
//! ```

#![warn(unreachable_pub)]

pub mod adjacency;
pub mod engine;
pub mod traversal;

// Re-exports
pub use adjacency::{AdjacencyIndex, EdgeOrientation, NodeLookup};
pub use engine::{Reachable, RelationshipGraphEngine};
pub use traversal::reachable_from;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
