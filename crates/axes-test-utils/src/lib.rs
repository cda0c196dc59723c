//! Testing utilities for the Axes workspace
//!
//! Shared fixtures: artifact builders and canned canvases.

#![allow(missing_docs)]

use axes_artifact::{
    ArtifactNode, AuthArtifact, AuthType, AuthVariant, Canvas, RelationshipEdge,
    ResourceArtifact, ResourceType, ResourceVariant,
};

pub fn user(name: &str, tenant: &str) -> ArtifactNode {
    auth(name, tenant, AuthType::AadUser, false)
}

pub fn jit_group(name: &str, tenant: &str) -> ArtifactNode {
    auth(name, tenant, AuthType::AadSecurityGroup, true)
}

pub fn certificate(name: &str, tenant: &str) -> ArtifactNode {
    auth(name, tenant, AuthType::Certificate, false)
}

pub fn auth(name: &str, tenant: &str, auth_type: AuthType, is_jit: bool) -> ArtifactNode {
    ArtifactNode::auth(
        name,
        tenant,
        AuthArtifact {
            auth_type,
            variant: AuthVariant::StandAlone,
            is_jit,
        },
    )
    .unwrap()
}

pub fn app(name: &str, tenant: &str) -> ArtifactNode {
    ArtifactNode::resource(
        name,
        tenant,
        ResourceArtifact {
            resource_type: ResourceType::NonProduction,
            variant: ResourceVariant::App,
        },
    )
    .unwrap()
}

pub fn vault(name: &str, tenant: &str) -> ArtifactNode {
    ArtifactNode::resource(
        name,
        tenant,
        ResourceArtifact {
            resource_type: ResourceType::Production,
            variant: ResourceVariant::SecretHolder,
        },
    )
    .unwrap()
}

/// Bare node with a short id, for graph-shape tests
pub fn named(id: &str) -> ArtifactNode {
    app(id, "contoso").with_id(id)
}

pub fn edge(source: &str, target: &str) -> RelationshipEdge {
    RelationshipEdge::new(source, target)
}

/// Chain `A - B - C` plus a disconnected `D`, ids `"a".."d"`
pub fn chain_with_island() -> Canvas {
    Canvas {
        nodes: vec![named("a"), named("b"), named("c"), named("d")],
        edges: vec![edge("a", "b"), edge("b", "c")],
    }
}

/// A small access graph across two tenants
///
/// ```text
/// contoso: alice -> ops (JIT group) -> signing-cert -> api-app -> secrets-vault
/// fabrikam: bob -> billing-app          (unconnected to contoso)
/// ```
pub fn access_graph() -> Canvas {
    let alice = user("alice", "contoso");
    let ops = jit_group("ops", "contoso");
    let cert = certificate("signing-cert", "contoso");
    let api = app("api-app", "contoso");
    let secrets = vault("secrets-vault", "contoso");
    let bob = user("bob", "fabrikam");
    let billing = app("billing-app", "fabrikam");

    let edges = vec![
        RelationshipEdge::connect(&alice, &ops),
        RelationshipEdge::connect(&ops, &cert),
        RelationshipEdge::connect(&cert, &api),
        RelationshipEdge::connect(&api, &secrets),
        RelationshipEdge::connect(&bob, &billing),
    ];

    Canvas {
        nodes: vec![alice, ops, cert, api, secrets, bob, billing],
        edges,
    }
}
