//! Artifact nodes
//!
//! An [`ArtifactNode`] is one identity principal or resource drawn on the
//! canvas. Every node shares a base of `{id, name, tenant}`; the remaining
//! fields live in a closed set of variants ([`ArtifactKind`]) which the query
//! engine never inspects.

use crate::id::ArtifactId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Attributes the query engine can select on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    /// Display name of the artifact
    Name,
    /// Tenant the artifact lives in
    Tenant,
}

impl AttributeKey {
    /// Attribute name as it appears in the attribute map
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Tenant => "Tenant",
        }
    }
}

impl Display for AttributeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when constructing artifacts
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArtifactError {
    /// A required base attribute was blank
    #[error("artifact {field} must not be empty")]
    EmptyField {
        /// Attribute that was blank
        field: AttributeKey,
    },
}

/// Kind of identity principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthType {
    /// Directory security group
    AadSecurityGroup,
    /// Directory user
    AadUser,
    /// Directory application registration
    AadApp,
    /// Certificate credential
    Certificate,
}

impl AuthType {
    /// Human-readable label, also used as the id prefix
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AadSecurityGroup => "AAD Security Group",
            Self::AadUser => "AAD User",
            Self::AadApp => "AAD App",
            Self::Certificate => "Certificate",
        }
    }
}

/// How an auth artifact relates to other artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AuthVariant {
    /// Exists on its own
    #[default]
    StandAlone,
    /// Derived from another auth artifact
    AuthDependent,
    /// Derived from a resource
    ResourceDependent,
}

/// Environment class of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// Non-production environment
    NonProduction,
    /// Production environment
    Production,
}

impl ResourceType {
    /// Human-readable label, also used as the id prefix
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NonProduction => "Non Production Resource",
            Self::Production => "Production Resource",
        }
    }
}

/// What a resource does with access granted to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResourceVariant {
    /// Ordinary application
    #[default]
    App,
    /// Holds secrets (key vaults and similar)
    SecretHolder,
}

/// Fields specific to identity principals
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthArtifact {
    /// Principal kind
    pub auth_type: AuthType,
    /// Dependency variant
    #[serde(default)]
    pub variant: AuthVariant,
    /// Whether access through this principal is granted just-in-time
    #[serde(default)]
    pub is_jit: bool,
}

/// Fields specific to resources
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceArtifact {
    /// Environment class
    pub resource_type: ResourceType,
    /// Secret-holding variant
    #[serde(default)]
    pub variant: ResourceVariant,
}

/// Closed set of artifact variants
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum ArtifactKind {
    /// Identity principal
    Auth(AuthArtifact),
    /// Resource
    Resource(ResourceArtifact),
}

impl ArtifactKind {
    /// Label of the concrete kind (`"AAD User"`, `"Production Resource"`, ...)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Auth(auth) => auth.auth_type.label(),
            Self::Resource(resource) => resource.resource_type.label(),
        }
    }

    /// Whether this is a just-in-time identity principal
    #[inline]
    #[must_use]
    pub const fn is_jit(&self) -> bool {
        matches!(self, Self::Auth(AuthArtifact { is_jit: true, .. }))
    }
}

/// One artifact on the canvas
///
/// # Invariants
/// - `id` is stable for the node's lifetime
/// - `name` and `tenant` are non-blank when built through [`ArtifactNode::new`];
///   deserialized nodes are taken as-is
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactNode {
    id: ArtifactId,
    name: String,
    tenant: String,
    kind: ArtifactKind,
}

impl ArtifactNode {
    /// Create a node, deriving its id from kind, tenant and name
    ///
    /// # Errors
    /// Returns [`ArtifactError::EmptyField`] if `name` or `tenant` is blank
    pub fn new(
        name: impl Into<String>,
        tenant: impl Into<String>,
        kind: ArtifactKind,
    ) -> Result<Self, ArtifactError> {
        let name = name.into();
        let tenant = tenant.into();
        if name.trim().is_empty() {
            return Err(ArtifactError::EmptyField {
                field: AttributeKey::Name,
            });
        }
        if tenant.trim().is_empty() {
            return Err(ArtifactError::EmptyField {
                field: AttributeKey::Tenant,
            });
        }
        Ok(Self {
            id: ArtifactId::derive(kind.label(), &tenant, &name),
            name,
            tenant,
            kind,
        })
    }

    /// Create an identity principal
    ///
    /// # Errors
    /// Returns [`ArtifactError::EmptyField`] if `name` or `tenant` is blank
    pub fn auth(
        name: impl Into<String>,
        tenant: impl Into<String>,
        auth: AuthArtifact,
    ) -> Result<Self, ArtifactError> {
        Self::new(name, tenant, ArtifactKind::Auth(auth))
    }

    /// Create a resource
    ///
    /// # Errors
    /// Returns [`ArtifactError::EmptyField`] if `name` or `tenant` is blank
    pub fn resource(
        name: impl Into<String>,
        tenant: impl Into<String>,
        resource: ResourceArtifact,
    ) -> Result<Self, ArtifactError> {
        Self::new(name, tenant, ArtifactKind::Resource(resource))
    }

    /// Replace the derived id
    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: impl Into<ArtifactId>) -> Self {
        self.id = id.into();
        self
    }

    /// Node id
    #[inline]
    #[must_use]
    pub fn id(&self) -> &ArtifactId {
        &self.id
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owning tenant
    #[inline]
    #[must_use]
    pub fn tenant(&self) -> &str {
        &self.tenant
    }

    /// Variant-specific payload
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &ArtifactKind {
        &self.kind
    }

    /// Read a base attribute
    #[inline]
    #[must_use]
    pub fn attribute(&self, key: AttributeKey) -> Option<&str> {
        match key {
            AttributeKey::Name => Some(&self.name),
            AttributeKey::Tenant => Some(&self.tenant),
        }
    }

    /// Attribute map view of the node
    ///
    /// Always carries `Name` and `Tenant`; variant descriptors are included
    /// for display but are not interpreted by queries.
    #[must_use]
    pub fn attributes(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        map.insert(AttributeKey::Name.as_str(), self.name.clone());
        map.insert(AttributeKey::Tenant.as_str(), self.tenant.clone());
        match &self.kind {
            ArtifactKind::Auth(auth) => {
                map.insert("AuthType", auth.auth_type.label().to_string());
                map.insert("AuthVariant", format!("{:?}", auth.variant));
                map.insert("IsJit", auth.is_jit.to_string());
            }
            ArtifactKind::Resource(resource) => {
                map.insert("ResourceType", resource.resource_type.label().to_string());
                map.insert("ResourceVariant", format!("{:?}", resource.variant));
            }
        }
        map
    }
}
