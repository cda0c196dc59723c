//! Relationship edges between artifacts

use crate::artifact::ArtifactNode;
use crate::id::ArtifactId;
use serde::{Deserialize, Serialize};

/// How access flows along an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccessKind {
    /// Standing access
    #[default]
    Standard,
    /// Access granted just-in-time through a JIT principal
    JustInTime,
}

impl AccessKind {
    /// Label shown on the canvas
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "has access",
            Self::JustInTime => "has JIT access",
        }
    }
}

/// Directed access or containment relation
///
/// Endpoints are weak references: an edge may name an id that is not on the
/// canvas, and consumers must tolerate that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipEdge {
    /// Id of the granting artifact
    pub source: ArtifactId,
    /// Id of the artifact access is granted to
    pub target: ArtifactId,
    /// Access flavour, presentation only
    #[serde(default)]
    pub access: AccessKind,
}

impl RelationshipEdge {
    /// Edge between two ids with standard access
    #[must_use]
    pub fn new(source: impl Into<ArtifactId>, target: impl Into<ArtifactId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            access: AccessKind::Standard,
        }
    }

    /// Connect two nodes, deriving the access kind from the source
    #[must_use]
    pub fn connect(source: &ArtifactNode, target: &ArtifactNode) -> Self {
        let access = if source.kind().is_jit() {
            AccessKind::JustInTime
        } else {
            AccessKind::Standard
        };
        Self {
            source: source.id().clone(),
            target: target.id().clone(),
            access,
        }
    }

    /// Editor id of the edge: `{source}-{target}`
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }

    /// Canvas label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.access.label()
    }
}
