//! Relationship graph engine
//!
//! Ties the query language to the graph: parse the raw query, evaluate the
//! statements against every node to get the seed set, then return the
//! relationship closure of the seeds.
//!
//! The engine holds no graph state. Every call works on the snapshot it is
//! given and keeps no reference to it afterwards.

use crate::adjacency::{AdjacencyIndex, EdgeOrientation, NodeLookup};
use crate::traversal::reachable_from;
use axes_artifact::{ArtifactId, ArtifactNode, RelationshipEdge};
use axes_query::{AxeQueryParser, ParsedQuery, QueryParser};
use indexmap::IndexMap;

/// Result of a relationship query: matching nodes plus everything reachable
/// from them
#[derive(Debug, Clone, Default)]
pub struct Reachable<'a> {
    nodes: IndexMap<&'a str, &'a ArtifactNode>,
    seeds: Vec<&'a str>,
}

impl<'a> Reachable<'a> {
    /// Ids in discovery order
    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.nodes.keys().copied()
    }

    /// Nodes in discovery order
    pub fn nodes(&self) -> impl Iterator<Item = &'a ArtifactNode> + '_ {
        self.nodes.values().copied()
    }

    /// Ids that matched the query directly
    #[inline]
    #[must_use]
    pub fn seeds(&self) -> &[&'a str] {
        &self.seeds
    }

    /// Whether the node is in the closure
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes in the closure
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing matched
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Owned ids, detached from the snapshot
    #[must_use]
    pub fn into_ids(self) -> Vec<ArtifactId> {
        self.nodes.values().map(|n| n.id().clone()).collect()
    }
}

/// Stateless query engine over artifact relationship graphs
///
/// Generic over the [`QueryParser`] so alternative query syntaxes can be
/// plugged in; defaults to [`AxeQueryParser`].
#[derive(Debug, Clone, Default)]
pub struct RelationshipGraphEngine<P = AxeQueryParser> {
    parser: P,
    orientation: EdgeOrientation,
}

impl RelationshipGraphEngine {
    /// Engine with the default parser and undirected traversal
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: QueryParser> RelationshipGraphEngine<P> {
    /// Engine with a custom parser
    #[inline]
    #[must_use]
    pub fn with_parser(parser: P) -> Self {
        Self {
            parser,
            orientation: EdgeOrientation::default(),
        }
    }

    /// Set the orientation used by [`Self::build_index`] and [`Self::search`]
    #[inline]
    #[must_use]
    pub fn with_orientation(mut self, orientation: EdgeOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Configured orientation
    #[inline]
    #[must_use]
    pub fn orientation(&self) -> EdgeOrientation {
        self.orientation
    }

    /// Parse a raw query with the engine's parser
    #[inline]
    #[must_use]
    pub fn parse(&self, raw: &str) -> ParsedQuery {
        self.parser.parse(raw)
    }

    /// Build the adjacency index for one query
    #[inline]
    #[must_use]
    pub fn build_index<'a>(
        &self,
        lookup: &NodeLookup<'a>,
        edges: &[RelationshipEdge],
    ) -> AdjacencyIndex<'a> {
        AdjacencyIndex::build(lookup, edges, self.orientation)
    }

    /// Nodes that satisfy every statement, in lookup order
    #[must_use]
    pub fn seeds<'a>(&self, lookup: &NodeLookup<'a>, query: &ParsedQuery) -> Vec<&'a ArtifactNode> {
        lookup.iter().filter(|node| query.matches(node)).collect()
    }

    /// Run a raw query against a prepared index
    #[must_use]
    pub fn query<'a>(
        &self,
        index: &AdjacencyIndex<'a>,
        lookup: &NodeLookup<'a>,
        raw: &str,
    ) -> Reachable<'a> {
        let query = self.parser.parse(raw);
        self.query_parsed(index, lookup, &query)
    }

    /// Run an already parsed query against a prepared index
    #[must_use]
    pub fn query_parsed<'a>(
        &self,
        index: &AdjacencyIndex<'a>,
        lookup: &NodeLookup<'a>,
        query: &ParsedQuery,
    ) -> Reachable<'a> {
        let seeds = self.seeds(lookup, query);
        tracing::debug!("query [{}] matched {} seed nodes", query, seeds.len());
        if seeds.is_empty() {
            return Reachable::default();
        }

        let nodes = reachable_from(index, &seeds);
        tracing::debug!("relationship closure holds {} nodes", nodes.len());
        Reachable {
            nodes,
            seeds: seeds.iter().map(|n| n.id().as_str()).collect(),
        }
    }

    /// One-shot search: index the snapshot, run the query, return owned ids
    #[must_use]
    pub fn search(
        &self,
        nodes: &[ArtifactNode],
        edges: &[RelationshipEdge],
        raw: &str,
    ) -> Vec<ArtifactId> {
        let lookup = NodeLookup::new(nodes);
        let index = self.build_index(&lookup, edges);
        self.query(&index, &lookup, raw).into_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axes_query::QueryStatement;
    use axes_test_utils::{access_graph, chain_with_island};
    use pretty_assertions::assert_eq;

    #[test]
    fn match_on_one_end_returns_whole_chain() {
        let canvas = chain_with_island();
        let engine = RelationshipGraphEngine::new();
        let lookup = NodeLookup::new(&canvas.nodes);
        let index = engine.build_index(&lookup, &canvas.edges);

        let result = engine.query(&index, &lookup, "name = a");
        assert_eq!(result.ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(result.seeds(), &["a"]);
        assert!(!result.contains("d"));
    }

    #[test]
    fn short_query_matches_every_node() {
        // a one-character clause is dropped, leaving an empty conjunction
        let canvas = chain_with_island();
        let engine = RelationshipGraphEngine::new();
        let lookup = NodeLookup::new(&canvas.nodes);
        let index = engine.build_index(&lookup, &canvas.edges);

        let result = engine.query(&index, &lookup, "a");
        assert_eq!(result.seeds().len(), 4);
        assert!(result.contains("d"));
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let canvas = chain_with_island();
        let engine = RelationshipGraphEngine::new();
        assert!(engine.search(&canvas.nodes, &canvas.edges, "nobody").is_empty());
    }

    #[test]
    fn directed_engine_follows_edge_direction() {
        let canvas = chain_with_island();
        let engine = RelationshipGraphEngine::new().with_orientation(EdgeOrientation::Directed);
        let ids = engine.search(&canvas.nodes, &canvas.edges, "name = b");
        assert_eq!(ids, vec![ArtifactId::new("b"), ArtifactId::new("c")]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let canvas = chain_with_island();
        let engine = RelationshipGraphEngine::new();
        assert_eq!(engine.search(&canvas.nodes, &canvas.edges, "").len(), 4);
    }

    #[test]
    fn tenant_query_surfaces_only_that_tenant_component() {
        let canvas = access_graph();
        let engine = RelationshipGraphEngine::new();
        let ids = engine.search(&canvas.nodes, &canvas.edges, "tenant = FABRIKAM");
        assert_eq!(
            ids,
            vec![
                ArtifactId::new("AAD User/fabrikam/bob"),
                ArtifactId::new("Non Production Resource/fabrikam/billing-app"),
            ]
        );
    }

    #[derive(Debug, Clone, Copy, Default)]
    struct TenantOnlyParser;

    impl QueryParser for TenantOnlyParser {
        fn parse(&self, raw: &str) -> ParsedQuery {
            vec![QueryStatement::new(
                axes_query::Entity::Tenant,
                axes_query::Condition::Equals,
                raw.trim(),
            )]
            .into()
        }
    }

    #[test]
    fn custom_parser_is_used() {
        let canvas = access_graph();
        let engine = RelationshipGraphEngine::with_parser(TenantOnlyParser);
        let ids = engine.search(&canvas.nodes, &canvas.edges, "contoso");
        assert_eq!(ids.len(), 5);
    }
}
