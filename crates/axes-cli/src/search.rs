//! Caller-side search policy
//!
//! The engine answers every query it is given. Deciding when a typed query is
//! worth answering (live search fires on every keystroke) belongs here.

use crate::config::{AxesConfig, SearchConfig};
use crate::error::{CliError, Result};
use axes_artifact::{ArtifactNode, Canvas};
use axes_graph::{EdgeOrientation, NodeLookup, RelationshipGraphEngine};
use std::collections::HashSet;
use std::path::Path;

/// When to query the engine and how to traverse
#[derive(Debug, Clone)]
pub struct SearchPolicy {
    min_query_len: usize,
    engine: RelationshipGraphEngine,
}

impl SearchPolicy {
    /// Policy from the `[search]` section
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            min_query_len: config.min_query_len,
            engine: RelationshipGraphEngine::new().with_orientation(config.orientation),
        }
    }

    /// Override the traversal orientation
    #[inline]
    #[must_use]
    pub fn with_orientation(mut self, orientation: EdgeOrientation) -> Self {
        self.engine = self.engine.with_orientation(orientation);
        self
    }

    /// Shortest trimmed query that reaches the engine
    #[inline]
    #[must_use]
    pub fn min_query_len(&self) -> usize {
        self.min_query_len
    }

    /// Whether `raw` is long enough to filter on
    #[must_use]
    pub fn should_query(&self, raw: &str) -> bool {
        raw.trim().chars().count() >= self.min_query_len
    }

    /// Nodes to show for `raw`, in canvas order
    ///
    /// Short queries leave the canvas unfiltered; otherwise the result is the
    /// relationship closure of the matching nodes. When several nodes share
    /// an id only the last one takes part in the query, so only that one can
    /// be shown.
    #[must_use]
    pub fn filter<'a>(&self, canvas: &'a Canvas, raw: &str) -> Vec<&'a ArtifactNode> {
        if !self.should_query(raw) {
            tracing::debug!("query shorter than {} chars, showing all nodes", self.min_query_len);
            return canvas.nodes.iter().collect();
        }

        let lookup = NodeLookup::new(&canvas.nodes);
        let index = self.engine.build_index(&lookup, &canvas.edges);
        let reachable = self.engine.query(&index, &lookup, raw);
        // by identity, not id: a shadowed duplicate was never evaluated
        let shown: HashSet<*const ArtifactNode> = reachable
            .nodes()
            .map(|node| node as *const ArtifactNode)
            .collect();
        canvas
            .nodes
            .iter()
            .filter(|&node| shown.contains(&(node as *const ArtifactNode)))
            .collect()
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl From<&AxesConfig> for SearchPolicy {
    fn from(config: &AxesConfig) -> Self {
        Self::new(&config.search)
    }
}

/// Filter a canvas with the policy configured in `config`
#[must_use]
pub fn filter_canvas<'a>(canvas: &'a Canvas, raw: &str, config: &AxesConfig) -> Vec<&'a ArtifactNode> {
    SearchPolicy::from(config).filter(canvas, raw)
}

/// Read a canvas snapshot from a JSON file
///
/// # Errors
/// Returns [`CliError::Io`] if the file cannot be read and
/// [`CliError::Canvas`] if it is not a valid snapshot
pub fn load_canvas(path: impl AsRef<Path>) -> Result<Canvas> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
    let canvas = Canvas::from_json(&json)?;

    for edge in canvas.dangling_edges() {
        tracing::warn!(
            "edge {} references a node missing from {}",
            edge.id(),
            path.display()
        );
    }
    tracing::debug!(
        "loaded canvas with {} nodes and {} edges",
        canvas.nodes.len(),
        canvas.edges.len()
    );
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axes_test_utils::{access_graph, app, chain_with_island, named};
    use pretty_assertions::assert_eq;

    fn names(nodes: &[&ArtifactNode]) -> Vec<String> {
        nodes.iter().map(|n| n.name().to_string()).collect()
    }

    #[test]
    fn short_query_leaves_canvas_unfiltered() {
        let canvas = access_graph();
        let policy = SearchPolicy::default();
        for raw in ["", "  ", "ab", " ab "] {
            assert!(!policy.should_query(raw));
            assert_eq!(policy.filter(&canvas, raw).len(), canvas.nodes.len());
        }
    }

    #[test]
    fn threshold_counts_characters_not_bytes() {
        let policy = SearchPolicy::new(&SearchConfig::default());
        assert!(!policy.should_query("éé"));
        assert!(policy.should_query("ééé"));
    }

    #[test]
    fn result_keeps_canvas_order() {
        let canvas = access_graph();
        let policy = SearchPolicy::default();
        let shown = policy.filter(&canvas, "secrets-vault");
        assert_eq!(
            names(&shown),
            vec!["alice", "ops", "signing-cert", "api-app", "secrets-vault"]
        );
    }

    #[test]
    fn configured_orientation_applies() {
        let canvas = chain_with_island();
        let config = AxesConfig::new().with_orientation(EdgeOrientation::Directed);
        assert_eq!(names(&filter_canvas(&canvas, "name=b", &config)), vec!["b", "c"]);
        assert_eq!(
            names(&filter_canvas(&canvas, "name=b", &AxesConfig::default())),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn duplicate_id_shows_only_the_evaluated_node() {
        let canvas = Canvas::new()
            .with_node(named("a"))
            .with_node(app("other", "fabrikam").with_id("a"));
        let shown = SearchPolicy::default().filter(&canvas, "tenant = fabrikam");
        assert_eq!(names(&shown), vec!["other"]);

        // the shadowed node is never a match, even on its own name
        assert!(SearchPolicy::default().filter(&canvas, "name = a").is_empty());
    }

    #[test]
    fn raised_threshold_suppresses_query() {
        let canvas = chain_with_island();
        let config = AxesConfig::new().with_min_query_len(10);
        assert_eq!(filter_canvas(&canvas, "name=a", &config).len(), 4);
    }
}
