use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Property bag attached to a node or edge by the database driver.
pub type Properties = Map<String, Value>;

// ---------------------------------------------------------------------------
// Driver side: the generic labeled graph exported by the database client
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultNode {
    pub id: String,
    #[serde(rename = "_label")]
    pub label: String,
    #[serde(flatten)]
    pub properties: Properties,
}

impl ResultNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            properties: Properties::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "_label")]
    pub label: String,
    #[serde(flatten)]
    pub properties: Properties,
}

impl ResultEdge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: label.into(),
            properties: Properties::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// Query result as handed over by the driver's "export as generic graph" call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphResult {
    #[serde(default)]
    pub nodes: Vec<ResultNode>,
    #[serde(default)]
    pub edges: Vec<ResultEdge>,
}

impl GraphResult {
    pub fn new(nodes: Vec<ResultNode>, edges: Vec<ResultEdge>) -> Self {
        Self { nodes, edges }
    }
}

// ---------------------------------------------------------------------------
// Node categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    User,
    Movie,
    Other(String),
}

impl NodeKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            "User" => NodeKind::User,
            "Movie" => NodeKind::Movie,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Front-end side: the {nodes, links} document consumed by the renderer
// ---------------------------------------------------------------------------

/// User nodes carry a bare string, every other node a one-element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeLabels {
    Single(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeProperties {
    User {
        #[serde(rename = "userId")]
        user_id: Value,
    },
    Titled {
        title: Value,
        year: Value,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizNode {
    pub id: String,
    pub labels: NodeLabels,
    pub properties: NodeProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizLink {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub link_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualizationGraph {
    pub nodes: Vec<VizNode>,
    pub links: Vec<VizLink>,
}

impl VisualizationGraph {
    /// Link endpoints that do not name any node in `nodes`, in link order.
    pub fn dangling_links(&self) -> Vec<&str> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.links
            .iter()
            .flat_map(|l| [l.source.as_str(), l.target.as_str()])
            .filter(|id| !ids.contains(id))
            .collect()
    }
}
