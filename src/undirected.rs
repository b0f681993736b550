// Undirected materialization - collapse a directed multigraph export into the
// undirected simple graph the projector is written against

use std::collections::HashMap;
use tracing::debug;

use crate::models::{GraphResult, ResultEdge, ResultNode};

/// Collapse `result` into an undirected simple graph.
///
/// Nodes are keyed by id and edges by their unordered endpoint pair. The first
/// occurrence keeps its position (and, for edges, its orientation); later
/// duplicates overwrite its label and merge their properties over it. Edge
/// endpoints with no node entry get a bare node appended after the others.
pub fn into_undirected(result: GraphResult) -> GraphResult {
    let GraphResult { nodes, edges } = result;
    let (input_nodes, input_edges) = (nodes.len(), edges.len());

    let mut node_index: HashMap<String, usize> = HashMap::with_capacity(nodes.len());
    let mut merged_nodes: Vec<ResultNode> = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node_index.get(&node.id) {
            Some(&idx) => {
                let existing = &mut merged_nodes[idx];
                existing.label = node.label;
                existing.properties.extend(node.properties);
            }
            None => {
                node_index.insert(node.id.clone(), merged_nodes.len());
                merged_nodes.push(node);
            }
        }
    }

    let mut edge_index: HashMap<(String, String), usize> = HashMap::with_capacity(edges.len());
    let mut merged_edges: Vec<ResultEdge> = Vec::with_capacity(edges.len());

    for edge in edges {
        for endpoint in [&edge.source, &edge.target] {
            if !node_index.contains_key(endpoint) {
                node_index.insert(endpoint.clone(), merged_nodes.len());
                merged_nodes.push(ResultNode::new(endpoint.clone(), String::new()));
            }
        }

        let key = edge_key(&edge.source, &edge.target);
        match edge_index.get(&key) {
            Some(&idx) => {
                let existing = &mut merged_edges[idx];
                existing.label = edge.label;
                existing.properties.extend(edge.properties);
            }
            None => {
                edge_index.insert(key, merged_edges.len());
                merged_edges.push(edge);
            }
        }
    }

    debug!(
        "Undirected materialization: {} -> {} nodes, {} -> {} edges",
        input_nodes,
        merged_nodes.len(),
        input_edges,
        merged_edges.len()
    );

    GraphResult::new(merged_nodes, merged_edges)
}

fn edge_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reverse_edges_collapse() {
        let result = GraphResult::new(
            vec![ResultNode::new("User_1", "User"), ResultNode::new("Movie_1", "Movie")],
            vec![
                ResultEdge::new("User_1", "Movie_1", "Rating").with_property("rating", 4.0),
                ResultEdge::new("Movie_1", "User_1", "Rating").with_property("rating", 2.5),
            ],
        );
        let graph = into_undirected(result);

        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].source, "User_1");
        assert_eq!(graph.edges[0].target, "Movie_1");
        assert_eq!(graph.edges[0].properties.get("rating"), Some(&json!(2.5)));
    }

    #[test]
    fn test_first_occurrence_keeps_position() {
        let result = GraphResult::new(
            vec![
                ResultNode::new("A", "User"),
                ResultNode::new("B", "Movie"),
                ResultNode::new("A", "User").with_property("userId", 1),
            ],
            vec![
                ResultEdge::new("A", "B", "Rating"),
                ResultEdge::new("B", "B", "Sequel"),
                ResultEdge::new("A", "B", "Tagged"),
            ],
        );
        let graph = into_undirected(result);

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B"]);
        assert_eq!(graph.nodes[0].properties.get("userId"), Some(&json!(1)));

        let labels: Vec<&str> = graph.edges.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Tagged", "Sequel"]);
    }

    #[test]
    fn test_missing_endpoints_are_added() {
        let result = GraphResult::new(
            vec![ResultNode::new("User_3", "User")],
            vec![ResultEdge::new("User_3", "Movie_8", "Rating")],
        );
        let graph = into_undirected(result);

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[1].id, "Movie_8");
        assert!(graph.nodes[1].label.is_empty());
    }
}
