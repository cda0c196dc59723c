//! Axes command line support
//!
//! The outer layer around the query engine: reads canvas snapshots and
//! configuration, installs logging, and applies the live-search policy
//! before handing queries to [`axes_graph::RelationshipGraphEngine`].
//!
//! # Example
//!
//! ```rust
//! use axes_artifact::Canvas;
//! use axes_cli::{filter_canvas, AxesConfig};
//!
//! let canvas = Canvas::new();
//! assert!(filter_canvas(&canvas, "name has app", &AxesConfig::default()).is_empty());
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod logging;
pub mod search;

// Re-exports
pub use config::{AxesConfig, LoggingConfig, SearchConfig, DEFAULT_MIN_QUERY_LEN};
pub use error::{CliError, Result};
pub use logging::Profile;
pub use search::{filter_canvas, load_canvas, SearchPolicy};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
