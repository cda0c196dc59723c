//! Predicate evaluation over artifact nodes
//!
//! Statements are evaluated case-insensitively against the node's base
//! attributes only. Nothing here fails: unsupported selectors, unsupported
//! conditions and missing or empty attributes make a statement false.

use crate::statement::{Condition, ParsedQuery, QueryStatement};
use axes_artifact::ArtifactNode;

/// Evaluate a single statement against a node
#[must_use]
pub fn statement_matches(node: &ArtifactNode, statement: &QueryStatement) -> bool {
    let Some(key) = statement.entity().attribute_key() else {
        return false;
    };
    let value = match node.attribute(key) {
        Some(value) if !value.is_empty() => value.to_lowercase(),
        _ => return false,
    };
    let pattern = statement.pattern();

    match statement.condition() {
        Condition::Equals => value == pattern,
        Condition::NotEquals => value != pattern,
        Condition::Has => value.contains(pattern),
        Condition::StartsWith => value.starts_with(pattern),
        Condition::EndsWith => value.ends_with(pattern),
        Condition::Unsupported(_) => false,
    }
}

/// Evaluate a conjunction of statements against a node
///
/// An empty statement list matches every node.
#[must_use]
pub fn matches(node: &ArtifactNode, predicates: &[QueryStatement]) -> bool {
    predicates.iter().all(|s| statement_matches(node, s))
}

impl ParsedQuery {
    /// Whether `node` satisfies every statement
    #[inline]
    #[must_use]
    pub fn matches(&self, node: &ArtifactNode) -> bool {
        matches(node, self.statements())
    }
}
