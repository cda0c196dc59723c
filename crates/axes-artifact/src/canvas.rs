//! Canvas snapshots
//!
//! A [`Canvas`] is the node and edge collection the editor hands over on
//! every query. It is plain serialisable data; storage and encryption are
//! left to the caller.

use crate::artifact::ArtifactNode;
use crate::edge::RelationshipEdge;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Errors reading or writing a canvas
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// Malformed canvas document
    #[error("invalid canvas json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Snapshot of every artifact and relationship on the canvas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    /// Artifacts, in drawing order
    #[serde(default)]
    pub nodes: Vec<ArtifactNode>,
    /// Relationships, in creation order
    #[serde(default)]
    pub edges: Vec<RelationshipEdge>,
}

impl Canvas {
    /// Empty canvas
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node
    #[must_use]
    pub fn with_node(mut self, node: ArtifactNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Add an edge
    #[must_use]
    pub fn with_edge(mut self, edge: RelationshipEdge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Parse a canvas from JSON
    ///
    /// # Errors
    /// Returns [`CanvasError::Json`] if the document is malformed
    pub fn from_json(json: &str) -> Result<Self, CanvasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the canvas as pretty-printed JSON
    ///
    /// # Errors
    /// Returns [`CanvasError::Json`] if serialisation fails
    pub fn to_json_pretty(&self) -> Result<String, CanvasError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Find a node by id
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&ArtifactNode> {
        self.nodes.iter().find(|n| n.id().as_str() == id)
    }

    /// Edges with at least one endpoint missing from the canvas
    #[must_use]
    pub fn dangling_edges(&self) -> Vec<&RelationshipEdge> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id().as_str()).collect();
        self.edges
            .iter()
            .filter(|e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
            .collect()
    }
}
