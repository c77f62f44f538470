//! petgraph::StableGraph wrapper keyed by normalized organization name.

use std::collections::HashMap;

use patnet_core::errors::ConfigurationError;
use patnet_core::models::{AliasEdge, RelationshipType};
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};

/// Lookup key: trimmed, whitespace-collapsed, case-folded.
pub fn normalize_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// A node in the alias graph: one organization name.
#[derive(Debug, Clone)]
pub struct OrgNode {
    pub key: String,
    /// Lexicographically smallest spelling of this key in the table.
    pub display: String,
}

pub type AliasStableGraph = StableGraph<OrgNode, RelationshipType, Directed>;

/// Alias graph: every node has at most one outgoing edge, pointing from an
/// observed name towards its canonical form.
#[derive(Debug, Clone, Default)]
pub struct AliasGraph {
    pub graph: AliasStableGraph,
    /// Map from normalized key → NodeIndex for O(1) lookup.
    pub node_index: HashMap<String, NodeIndex>,
}

impl AliasGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from alias rows, rejecting malformed and ambiguous rows.
    ///
    /// Rows whose two sides normalize to the same key declare a name
    /// self-canonical and add no edge. Cycles are not checked here.
    pub fn from_edges(rows: &[AliasEdge]) -> Result<Self, ConfigurationError> {
        let mut graph = Self::new();
        for (row, edge) in rows.iter().enumerate() {
            let observed = edge.observed_name.trim();
            let canonical = edge.canonical_form.trim();
            if observed.is_empty() {
                return Err(ConfigurationError::MalformedAlias {
                    row,
                    reason: "empty observed_name".to_string(),
                });
            }
            if canonical.is_empty() {
                return Err(ConfigurationError::MalformedAlias {
                    row,
                    reason: format!("empty canonical_form for '{observed}'"),
                });
            }

            let source = graph.ensure_node(observed);
            let target = graph.ensure_node(canonical);
            if source == target {
                continue;
            }

            if let Some((existing, _)) = graph.successor(source) {
                if existing == target {
                    continue;
                }
                return Err(ConfigurationError::AmbiguousAlias {
                    observed: observed.to_string(),
                    first: graph.graph[existing].display.clone(),
                    second: canonical.to_string(),
                });
            }
            graph.graph.add_edge(source, target, edge.relationship_type);
        }
        Ok(graph)
    }

    /// Get or create the node for `name`. A repeated key keeps the smallest
    /// spelling as its display form.
    pub fn ensure_node(&mut self, name: &str) -> NodeIndex {
        let key = normalize_key(name);
        if let Some(&idx) = self.node_index.get(&key) {
            let spelling = name.trim();
            if spelling < self.graph[idx].display.as_str() {
                self.graph[idx].display = spelling.to_string();
            }
            return idx;
        }
        let idx = self.graph.add_node(OrgNode {
            key: key.clone(),
            display: name.trim().to_string(),
        });
        self.node_index.insert(key, idx);
        idx
    }

    /// Look up a node by any spelling of its name.
    pub fn get_node(&self, name: &str) -> Option<NodeIndex> {
        self.node_index.get(&normalize_key(name)).copied()
    }

    /// The single outgoing alias edge of `node`, if any.
    pub fn successor(&self, node: NodeIndex) -> Option<(NodeIndex, RelationshipType)> {
        self.graph
            .edges_directed(node, Direction::Outgoing)
            .next()
            .map(|e| (e.target(), *e.weight()))
    }

    pub fn display(&self, node: NodeIndex) -> &str {
        &self.graph[node].display
    }

    /// Nodes with no outgoing edge: canonical roots.
    pub fn roots(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .node_indices()
            .filter(move |&n| self.successor(n).is_none())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
