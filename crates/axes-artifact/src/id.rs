//! Stable artifact identifiers
//!
//! Provides [`ArtifactId`], the opaque key every node and edge refers to.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};

/// Separator between the segments of a derived id
pub const ID_SEPARATOR: char = '/';

/// Opaque, stable identifier of an artifact on the canvas
///
/// The editor derives ids from artifact kind, tenant and name
/// (`"AAD User/contoso/alice"`). Uniqueness is the caller's concern; the
/// query engine only compares ids for equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    /// Wrap an existing id string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the editor's id for an artifact: `{kind}/{tenant}/{name}`
    #[must_use]
    pub fn derive(kind_label: &str, tenant: &str, name: &str) -> Self {
        Self(format!(
            "{kind_label}{ID_SEPARATOR}{tenant}{ID_SEPARATOR}{name}"
        ))
    }

    /// Borrow the id text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ArtifactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArtifactId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ArtifactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtifactId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ArtifactId {
    fn from(value: String) -> Self {
        Self(value)
    }
}
