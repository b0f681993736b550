// Graph shapes on both sides of the projection
pub mod graph_models;

pub use graph_models::{
    GraphResult, NodeKind, NodeLabels, NodeProperties, Properties, ResultEdge, ResultNode,
    VisualizationGraph, VizLink, VizNode,
};
