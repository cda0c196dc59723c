//! Axe query parser
//!
//! Turns a loosely structured, live-typed search string into a
//! [`ParsedQuery`]. The grammar is
//!
//! ```text
//! query  := clause (';' clause)*
//! clause := entity condition match | match
//! ```
//!
//! Parsing never fails: anything that does not split cleanly into
//! `entity condition match` becomes a bare `name = clause` statement.
//!
//! Before splitting, the query is trimmed, case-folded and every whitespace
//! run is collapsed to one space, so worded conditions (` has `) are found
//! whatever whitespace separates them.

use crate::statement::{Condition, Entity, ParsedQuery, QueryStatement};

/// Clause separator
pub const CLAUSE_SEPARATOR: char = ';';

/// Clauses shorter than this (after trimming) are dropped
pub const MIN_CLAUSE_LEN: usize = 3;

/// Condition tokens, longest first
///
/// When two tokens start at the same offset the earlier (longer) entry wins,
/// so `==` is never read as `=` followed by a match beginning with `=`.
pub const CONDITION_TOKENS: [&str; 7] = [
    " startswith ",
    " endswith ",
    " has ",
    "===",
    "==",
    "!=",
    "=",
];

/// Parser seam used by the graph engine
pub trait QueryParser: Send + Sync {
    /// Parse a raw query string. Must not fail or panic on any input.
    fn parse(&self, raw: &str) -> ParsedQuery;
}

/// Stateless parser for the Axe query language
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxeQueryParser;

impl AxeQueryParser {
    /// Create parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse one trimmed clause into a statement
    #[must_use]
    pub fn parse_clause(clause: &str) -> QueryStatement {
        match find_condition(clause) {
            Some(found) if found.start > 0 && found.end < clause.len() => {
                let entity: Entity = clause[..found.start].into();
                let condition: Condition = found.token.into();
                QueryStatement::new(entity, condition, clause[found.end..].trim())
            }
            _ => QueryStatement::bare(clause),
        }
    }
}

impl QueryParser for AxeQueryParser {
    fn parse(&self, raw: &str) -> ParsedQuery {
        let folded = sanitize(raw);
        let query: ParsedQuery = folded
            .split(CLAUSE_SEPARATOR)
            .map(str::trim)
            .filter(|clause| clause.chars().count() >= MIN_CLAUSE_LEN)
            .map(|clause| {
                let statement = Self::parse_clause(clause);
                tracing::trace!("clause {:?} -> {:?}", clause, statement);
                statement
            })
            .collect();
        tracing::debug!("parsed query into {} statements", query.len());
        query
    }
}

/// Collapse whitespace runs to single spaces, trim and case-fold
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Parse with the default parser
#[inline]
#[must_use]
pub fn parse(raw: &str) -> ParsedQuery {
    AxeQueryParser.parse(raw)
}

/// Location of a condition token inside a clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch {
    /// Token text
    pub token: &'static str,
    /// Byte offset of the first token byte
    pub start: usize,
    /// Byte offset just past the token
    pub end: usize,
}

/// Find the condition token of a clause
///
/// Picks the token whose first occurrence is leftmost; among tokens starting
/// at the same offset the longest wins.
#[must_use]
pub fn find_condition(clause: &str) -> Option<TokenMatch> {
    let mut best: Option<TokenMatch> = None;
    for token in CONDITION_TOKENS {
        let Some(start) = clause.find(token) else {
            continue;
        };
        if best.map_or(true, |b| start < b.start) {
            best = Some(TokenMatch {
                token,
                start,
                end: start + token.len(),
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stmt(entity: Entity, condition: Condition, pattern: &str) -> QueryStatement {
        QueryStatement::new(entity, condition, pattern)
    }

    #[test]
    fn tokens_are_length_descending() {
        for pair in CONDITION_TOKENS.windows(2) {
            assert!(pair[0].len() >= pair[1].len(), "{pair:?}");
        }
    }

    #[test]
    fn bare_clause_is_name_equals() {
        assert_eq!(
            parse("contoso").statements(),
            &[stmt(Entity::Name, Condition::Equals, "contoso")]
        );
    }

    #[test]
    fn double_equals_preferred_over_single() {
        let query = parse("type==Foo");
        assert_eq!(
            query.statements(),
            &[stmt(Entity::Unsupported("type".into()), Condition::Equals, "foo")]
        );
    }

    #[test]
    fn triple_equals() {
        assert_eq!(
            parse("name===alice").statements(),
            &[stmt(Entity::Name, Condition::Equals, "alice")]
        );
    }

    #[test]
    fn leftmost_token_wins_over_longer_later_token() {
        // `=` at offset 4 precedes ` has ` at offset 6
        let query = parse("name=a has b");
        assert_eq!(
            query.statements(),
            &[stmt(Entity::Name, Condition::Equals, "a has b")]
        );
    }

    #[test]
    fn not_equals_is_leftmost_over_embedded_equals() {
        assert_eq!(
            parse("tenant != contoso").statements(),
            &[stmt(Entity::Tenant, Condition::NotEquals, "contoso")]
        );
    }

    #[test]
    fn worded_conditions() {
        let query = parse("Name has Cert; tenant startswith con; name endswith app");
        assert_eq!(
            query.statements(),
            &[
                stmt(Entity::Name, Condition::Has, "cert"),
                stmt(Entity::Tenant, Condition::StartsWith, "con"),
                stmt(Entity::Name, Condition::EndsWith, "app"),
            ]
        );
    }

    #[test]
    fn token_at_start_falls_back_to_bare() {
        assert_eq!(
            parse("=abc").statements(),
            &[stmt(Entity::Name, Condition::Equals, "=abc")]
        );
    }

    #[test]
    fn token_consuming_rest_falls_back_to_bare() {
        assert_eq!(
            parse("name=").statements(),
            &[stmt(Entity::Name, Condition::Equals, "name=")]
        );
    }

    #[test]
    fn short_clauses_dropped() {
        let query = parse("ab; ; x ;  abc  ;a=");
        assert_eq!(query.statements(), &[QueryStatement::bare("abc")]);
    }

    #[test]
    fn empty_input_yields_no_statements() {
        assert!(parse("").is_empty());
        assert!(parse("   ;;  ").is_empty());
    }

    #[test]
    fn clause_order_preserved() {
        let query = parse("tenant=b; name=a");
        assert_eq!(query[0].entity(), &Entity::Tenant);
        assert_eq!(query[1].entity(), &Entity::Name);
    }

    #[test]
    fn unknown_selector_kept_as_unsupported() {
        let query = parse("owner = bob");
        assert_eq!(query[0].entity(), &Entity::Unsupported("owner".into()));
    }

    #[test]
    fn whitespace_runs_collapse() {
        assert_eq!(sanitize("  Name\t\tHAS \n cert  "), "name has cert");
        assert_eq!(
            parse("name\thas\ncert").statements(),
            &[stmt(Entity::Name, Condition::Has, "cert")]
        );
    }

    #[test]
    fn tab_inside_entity_renders_back_to_same_statement() {
        let query = parse(" has has\t has name");
        assert_eq!(
            query.statements(),
            &[stmt(Entity::Unsupported("has".into()), Condition::Has, "has name")]
        );
        assert_eq!(parse(&query.to_string()), query);
    }

    #[test]
    fn find_condition_reports_offsets() {
        let found = find_condition("name has x").unwrap();
        assert_eq!(found.token, " has ");
        assert_eq!((found.start, found.end), (4, 9));
        assert!(find_condition("plain").is_none());
    }
}
