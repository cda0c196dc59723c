//! Parsed query statements
//!
//! A [`QueryStatement`] is one `entity condition match` predicate. A
//! [`ParsedQuery`] is the ordered sequence of statements produced from one
//! raw query string; its statements are implicitly AND-ed.

use axes_artifact::AttributeKey;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

/// Attribute selector of a statement
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Entity {
    /// Selects the artifact name
    Name,
    /// Selects the artifact tenant
    Tenant,
    /// Selector the engine does not know; never matches
    Unsupported(String),
}

impl Entity {
    /// Attribute this selector reads, `None` for unsupported selectors
    #[inline]
    #[must_use]
    pub fn attribute_key(&self) -> Option<AttributeKey> {
        match self {
            Self::Name => Some(AttributeKey::Name),
            Self::Tenant => Some(AttributeKey::Tenant),
            Self::Unsupported(_) => None,
        }
    }

    /// Selector text as written in a query
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Tenant => "tenant",
            Self::Unsupported(raw) => raw,
        }
    }
}

impl FromStr for Entity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        Ok(match folded.as_str() {
            "name" => Self::Name,
            "tenant" => Self::Tenant,
            _ => Self::Unsupported(folded),
        })
    }
}

impl From<String> for Entity {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(entity) => entity,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Entity {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<Entity> for String {
    fn from(value: Entity) -> Self {
        value.as_str().to_string()
    }
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison applied between attribute and match text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    /// Exact equality
    Equals,
    /// Negated exact equality
    NotEquals,
    /// Substring containment
    Has,
    /// Prefix match
    StartsWith,
    /// Suffix match
    EndsWith,
    /// Condition the engine does not know; never matches
    Unsupported(String),
}

impl Condition {
    /// Canonical operator text
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Equals => "=",
            Self::NotEquals => "!=",
            Self::Has => "has",
            Self::StartsWith => "startswith",
            Self::EndsWith => "endswith",
            Self::Unsupported(raw) => raw,
        }
    }

    /// Whether the operator is written as a word (`has`, `startswith`, ...)
    #[inline]
    #[must_use]
    pub fn is_worded(&self) -> bool {
        matches!(self, Self::Has | Self::StartsWith | Self::EndsWith)
    }
}

impl FromStr for Condition {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded = s.trim().to_lowercase();
        Ok(match folded.as_str() {
            "=" | "==" | "===" | "equals" => Self::Equals,
            "!=" | "notequals" => Self::NotEquals,
            "has" => Self::Has,
            "startswith" => Self::StartsWith,
            "endswith" => Self::EndsWith,
            _ => Self::Unsupported(folded),
        })
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(condition) => condition,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        value.as_str().to_string()
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed predicate
///
/// # Invariants
/// - `pattern` is case-folded on construction, including deserialization
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StatementRepr")]
pub struct QueryStatement {
    entity: Entity,
    condition: Condition,
    #[serde(rename = "match")]
    pattern: String,
}

#[derive(Deserialize)]
struct StatementRepr {
    entity: Entity,
    condition: Condition,
    #[serde(rename = "match")]
    pattern: String,
}

impl From<StatementRepr> for QueryStatement {
    fn from(repr: StatementRepr) -> Self {
        Self::new(repr.entity, repr.condition, repr.pattern)
    }
}

impl QueryStatement {
    /// Create a statement, case-folding the match text
    #[must_use]
    pub fn new(entity: Entity, condition: Condition, pattern: impl AsRef<str>) -> Self {
        Self {
            entity,
            condition,
            pattern: pattern.as_ref().to_lowercase(),
        }
    }

    /// Bare match: `name = pattern`
    #[inline]
    #[must_use]
    pub fn bare(pattern: impl AsRef<str>) -> Self {
        Self::new(Entity::Name, Condition::Equals, pattern)
    }

    /// Attribute selector
    #[inline]
    #[must_use]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Comparison
    #[inline]
    #[must_use]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Case-folded match text
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Copy with a different match text
    #[must_use]
    pub fn with_pattern(&self, pattern: impl AsRef<str>) -> Self {
        Self::new(self.entity.clone(), self.condition.clone(), pattern)
    }
}

/// Renders the statement as a clause that parses back to itself.
///
/// Symbolic operators are glued to the entity and followed by a space so a
/// match text starting with `=` cannot merge into a longer operator; an
/// entity ending in `!` gets a separating space for the same reason.
impl Display for QueryStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.condition.is_worded() || matches!(self.condition, Condition::Unsupported(_)) {
            write!(f, "{} {} {}", self.entity, self.condition, self.pattern)
        } else {
            let sep = if self.entity.as_str().ends_with('!') { " " } else { "" };
            write!(f, "{}{sep}{} {}", self.entity, self.condition, self.pattern)
        }
    }
}

/// Ordered statements of one query, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedQuery(Vec<QueryStatement>);

impl ParsedQuery {
    /// Wrap statements
    #[inline]
    #[must_use]
    pub fn new(statements: Vec<QueryStatement>) -> Self {
        Self(statements)
    }

    /// Statements in clause order
    #[inline]
    #[must_use]
    pub fn statements(&self) -> &[QueryStatement] {
        &self.0
    }

    /// Consume into the statement list
    #[inline]
    #[must_use]
    pub fn into_statements(self) -> Vec<QueryStatement> {
        self.0
    }
}

impl Deref for ParsedQuery {
    type Target = [QueryStatement];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<QueryStatement>> for ParsedQuery {
    fn from(value: Vec<QueryStatement>) -> Self {
        Self(value)
    }
}

impl FromIterator<QueryStatement> for ParsedQuery {
    fn from_iter<I: IntoIterator<Item = QueryStatement>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ParsedQuery {
    type Item = QueryStatement;
    type IntoIter = std::vec::IntoIter<QueryStatement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedQuery {
    type Item = &'a QueryStatement;
    type IntoIter = std::slice::Iter<'a, QueryStatement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for ParsedQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
