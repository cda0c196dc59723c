//! Axes Artifact Model
//!
//! Identity principals, resources and the relationships between them.
//!
//! # Core Concepts
//!
//! - [`ArtifactNode`]: One artifact with a shared `{id, name, tenant}` base
//! - [`ArtifactKind`]: Closed set of variants (auth principal or resource)
//! - [`RelationshipEdge`]: Directed access relation between two ids
//! - [`Canvas`]: Serialisable snapshot of nodes and edges
//!
//! # Example
//!
//! ```rust
//! use axes_artifact::{ArtifactNode, AuthArtifact, AuthType, AuthVariant, RelationshipEdge};
//!
//! let alice = ArtifactNode::auth(
//!     "alice",
//!     "contoso",
//!     AuthArtifact { auth_type: AuthType::AadUser, variant: AuthVariant::StandAlone, is_jit: false },
//! )
//! .unwrap();
//! assert_eq!(alice.id().as_str(), "AAD User/contoso/alice");
//!
//! let edge = RelationshipEdge::new(alice.id().clone(), "Production Resource/contoso/vault");
//! assert_eq!(edge.label(), "has access");
//! ```

#![warn(unreachable_pub)]

mod artifact;
mod canvas;
mod edge;
mod id;

pub use artifact::{
    ArtifactError, ArtifactKind, ArtifactNode, AttributeKey, AuthArtifact, AuthType, AuthVariant,
    ResourceArtifact, ResourceType, ResourceVariant,
};
pub use canvas::{Canvas, CanvasError};
pub use edge::{AccessKind, RelationshipEdge};
pub use id::{ArtifactId, ID_SEPARATOR};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
