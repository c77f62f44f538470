//! Cycle detection over the alias graph using Tarjan's SCC.
//! A cyclic table is a configuration error, never silently broken.

use patnet_core::errors::ConfigurationError;
use petgraph::algo::tarjan_scc;
use petgraph::stable_graph::NodeIndex;

use super::graph::AliasGraph;

/// All cycles in the graph, each as the node set of a strongly connected
/// component with more than one node.
pub fn find_cycles(graph: &AliasGraph) -> Vec<Vec<NodeIndex>> {
    tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .collect()
}

/// Fail with `AliasCycle` if the graph contains any cycle.
///
/// The reported cycle is the one containing the smallest key, walked from
/// that key, so the message is the same on every run.
pub fn ensure_acyclic(graph: &AliasGraph) -> Result<(), ConfigurationError> {
    let cycles = find_cycles(graph);
    let start = cycles
        .iter()
        .flatten()
        .min_by(|a, b| graph.graph[**a].key.cmp(&graph.graph[**b].key));
    match start {
        Some(&start) => Err(ConfigurationError::AliasCycle {
            cycle: describe_cycle(graph, start),
        }),
        None => Ok(()),
    }
}

/// Render `a -> b -> ... -> a` by following successors from `start`.
pub fn describe_cycle(graph: &AliasGraph, start: NodeIndex) -> String {
    let mut names = vec![graph.display(start).to_string()];
    let mut current = start;
    while let Some((next, _)) = graph.successor(current) {
        names.push(graph.display(next).to_string());
        if next == start || names.len() > graph.node_count() + 1 {
            break;
        }
        current = next;
    }
    names.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use patnet_core::models::{AliasEdge, RelationshipType};

    fn row(observed: &str, canonical: &str) -> AliasEdge {
        AliasEdge::new(observed, canonical, RelationshipType::Merger)
    }

    #[test]
    fn chain_is_acyclic() {
        let graph = AliasGraph::from_edges(&[row("a", "b"), row("b", "c")]).unwrap();
        assert!(find_cycles(&graph).is_empty());
        assert!(ensure_acyclic(&graph).is_ok());
    }

    #[test]
    fn two_cycle_is_reported_from_smallest_key() {
        let graph = AliasGraph::from_edges(&[row("B", "A"), row("A", "B")]).unwrap();
        let err = ensure_acyclic(&graph).unwrap_err();
        match err {
            ConfigurationError::AliasCycle { cycle } => assert_eq!(cycle, "A -> B -> A"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn cycle_behind_a_tail_is_found() {
        let graph =
            AliasGraph::from_edges(&[row("tail", "x"), row("x", "y"), row("y", "z"), row("z", "x")])
                .unwrap();
        assert_eq!(find_cycles(&graph).len(), 1);
        assert!(ensure_acyclic(&graph).is_err());
    }
}
