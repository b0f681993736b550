// Result Projector - driver graph result into the renderer's {nodes, links} shape

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::models::{
    GraphResult, NodeKind, NodeLabels, NodeProperties, ResultEdge, ResultNode,
    VisualizationGraph, VizLink, VizNode,
};

/// Label the renderer expects on user nodes.
pub const PERSON_LABEL: &str = "Person";

/// Map every node and edge of `result`, in order, onto the visualization schema.
///
/// Nothing is dropped, merged or reordered. Fails on the first node that lacks a
/// property its kind needs; a property present with a `null` value passes through.
pub fn project(result: &GraphResult) -> AppResult<VisualizationGraph> {
    let nodes = result
        .nodes
        .iter()
        .map(project_node)
        .collect::<AppResult<Vec<_>>>()?;
    let links: Vec<VizLink> = result.edges.iter().map(project_edge).collect();

    let graph = VisualizationGraph { nodes, links };

    let dangling = graph.dangling_links();
    if !dangling.is_empty() {
        warn!(
            "Projected graph has {} link endpoint(s) without a node: {:?}",
            dangling.len(),
            dangling
        );
    }

    debug!(
        "Projected graph result: {} nodes, {} links",
        graph.nodes.len(),
        graph.links.len()
    );
    Ok(graph)
}

fn project_node(node: &ResultNode) -> AppResult<VizNode> {
    let (labels, properties) = match NodeKind::from_label(&node.label) {
        NodeKind::User => (
            NodeLabels::Single(PERSON_LABEL.to_string()),
            NodeProperties::User {
                user_id: required(node, "userId")?,
            },
        ),
        NodeKind::Movie | NodeKind::Other(_) => (
            NodeLabels::List(vec![node.label.clone()]),
            NodeProperties::Titled {
                title: required(node, "title")?,
                year: required(node, "year")?,
            },
        ),
    };

    Ok(VizNode {
        id: node.id.clone(),
        labels,
        properties,
    })
}

fn project_edge(edge: &ResultEdge) -> VizLink {
    VizLink {
        source: edge.source.clone(),
        target: edge.target.clone(),
        link_type: edge.label.clone(),
    }
}

fn required(node: &ResultNode, property: &'static str) -> AppResult<Value> {
    node.properties
        .get(property)
        .cloned()
        .ok_or_else(|| AppError::MissingProperty {
            node_id: node.id.clone(),
            property,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(id: &str, user_id: i64) -> ResultNode {
        ResultNode::new(id, "User").with_property("userId", user_id)
    }

    fn movie(id: &str, title: &str, year: i64) -> ResultNode {
        ResultNode::new(id, "Movie")
            .with_property("title", title)
            .with_property("year", year)
    }

    #[test]
    fn test_user_node_becomes_person() {
        let result = GraphResult::new(vec![user("User_2", 2)], vec![]);
        let graph = project(&result).unwrap();

        assert_eq!(
            serde_json::to_value(&graph.nodes[0]).unwrap(),
            json!({"id": "User_2", "labels": "Person", "properties": {"userId": 2}})
        );
    }

    #[test]
    fn test_movie_node_keeps_label_list() {
        let result = GraphResult::new(vec![movie("Movie_89774", "Warrior (2011)", 2011)], vec![]);
        let graph = project(&result).unwrap();

        assert_eq!(
            serde_json::to_value(&graph.nodes[0]).unwrap(),
            json!({
                "id": "Movie_89774",
                "labels": ["Movie"],
                "properties": {"title": "Warrior (2011)", "year": 2011}
            })
        );
    }

    #[test]
    fn test_other_label_projects_like_movie() {
        let node = ResultNode::new("Show_1", "Show")
            .with_property("title", "Twin Peaks")
            .with_property("year", 1990)
            .with_property("genres", "Drama");
        let graph = project(&GraphResult::new(vec![node], vec![])).unwrap();

        assert_eq!(graph.nodes[0].labels, NodeLabels::List(vec!["Show".to_string()]));
        assert_eq!(
            graph.nodes[0].properties,
            NodeProperties::Titled {
                title: json!("Twin Peaks"),
                year: json!(1990)
            }
        );
    }

    #[test]
    fn test_edge_properties_are_dropped() {
        let edge = ResultEdge::new("User_15", "Movie_143385", "Rating")
            .with_property("rating", 3.0)
            .with_property("timestamp", 1510572581_i64);
        let result = GraphResult::new(
            vec![user("User_15", 15), movie("Movie_143385", "The Death of Stalin (2017)", 2017)],
            vec![edge],
        );
        let graph = project(&result).unwrap();

        assert_eq!(
            serde_json::to_value(&graph.links[0]).unwrap(),
            json!({"source": "User_15", "target": "Movie_143385", "type": "Rating"})
        );
    }

    #[test]
    fn test_missing_user_id_fails() {
        let result = GraphResult::new(vec![ResultNode::new("User_7", "User")], vec![]);
        match project(&result) {
            Err(AppError::MissingProperty { node_id, property }) => {
                assert_eq!(node_id, "User_7");
                assert_eq!(property, "userId");
            }
            other => panic!("expected MissingProperty, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_year_fails() {
        let node = ResultNode::new("Movie_1", "Movie").with_property("title", "Toy Story (1995)");
        let err = project(&GraphResult::new(vec![node], vec![])).unwrap_err();
        assert!(matches!(err, AppError::MissingProperty { property: "year", .. }));
    }

    #[test]
    fn test_null_property_passes_through() {
        let node = ResultNode::new("Movie_5", "Movie")
            .with_property("title", "Untitled")
            .with_property("year", Value::Null);
        let graph = project(&GraphResult::new(vec![node], vec![])).unwrap();
        assert_eq!(
            graph.nodes[0].properties,
            NodeProperties::Titled {
                title: json!("Untitled"),
                year: Value::Null
            }
        );
    }

    #[test]
    fn test_empty_result() {
        let graph = project(&GraphResult::default()).unwrap();
        assert_eq!(serde_json::to_value(&graph).unwrap(), json!({"nodes": [], "links": []}));
    }
}
