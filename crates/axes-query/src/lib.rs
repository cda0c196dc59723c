//! Axe Query Language
//!
//! A semicolon-delimited micro-language of attribute predicates:
//!
//! ```text
//! tenant = contoso; name startswith cert
//! ```
//!
//! # Overview
//!
//! - [`AxeQueryParser`]: Stateless parser, raw string → [`ParsedQuery`]
//! - [`QueryStatement`]: One `entity condition match` predicate
//! - [`matches`]: AND-evaluation of statements against an artifact
//!
//! Neither parsing nor evaluation can fail. Malformed clauses become bare
//! name matches, and unknown selectors or conditions simply never match.
//!
//! # Example
//!
//! ```rust
//! use axes_query::{parse, Condition, Entity};
//!
//! let query = parse("Tenant=Contoso; name has cert");
//! assert_eq!(query.len(), 2);
//! assert_eq!(query[0].entity(), &Entity::Tenant);
//! assert_eq!(query[1].condition(), &Condition::Has);
//! assert_eq!(query.to_string(), "tenant= contoso; name has cert");
//! ```

#![warn(unreachable_pub)]

pub mod parser;
pub mod predicate;
pub mod statement;

// Re-exports
pub use parser::{
    find_condition, parse, sanitize, AxeQueryParser, QueryParser, TokenMatch, CLAUSE_SEPARATOR,
    CONDITION_TOKENS, MIN_CLAUSE_LEN,
};
pub use predicate::{matches, statement_matches};
pub use statement::{Condition, Entity, ParsedQuery, QueryStatement};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for query operations
    pub use crate::{AxeQueryParser, Condition, Entity, ParsedQuery, QueryParser, QueryStatement};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
