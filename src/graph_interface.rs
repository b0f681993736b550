// HTTP surface - query building and result projection for the graph front-end

use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::{
    app_state::AppState,
    error::AppResult,
    models::{GraphResult, VisualizationGraph},
    projector::project,
    query_builder::{ComparisonOperator, MovieQuery},
    undirected::into_undirected,
};

// HTTP Request/Response types
#[derive(Debug, Default, Deserialize)]
pub struct BuildQueryRequest {
    pub year: Option<i64>,
    pub operator: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BuildQueryResponse {
    pub query: String,
}

// HTTP Handlers

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "Movie Graph Visualization"
    }))
}

pub async fn build_query_handler(
    State(state): State<AppState>,
    payload: Result<Json<BuildQueryRequest>, JsonRejection>,
) -> AppResult<Json<BuildQueryResponse>> {
    let Json(req) = payload?;
    let operator = match req.operator.as_deref() {
        Some(op) => op.parse::<ComparisonOperator>()?,
        None => state.config.query.default_operator,
    };

    let mut query = MovieQuery::new()
        .operator(operator)
        .limit(req.limit.unwrap_or(state.config.query.default_limit));
    if let Some(year) = req.year {
        query = query.year(year);
    }

    Ok(Json(BuildQueryResponse {
        query: query.build(),
    }))
}

pub async fn project_graph_handler(
    payload: Result<Json<GraphResult>, JsonRejection>,
) -> AppResult<Json<VisualizationGraph>> {
    let Json(result) = payload?;
    info!(
        "Projecting graph result: {} nodes, {} edges",
        result.nodes.len(),
        result.edges.len()
    );
    Ok(Json(project(&result)?))
}

pub async fn project_undirected_handler(
    payload: Result<Json<GraphResult>, JsonRejection>,
) -> AppResult<Json<VisualizationGraph>> {
    let Json(result) = payload?;
    let result = into_undirected(result);
    info!(
        "Projecting undirected graph result: {} nodes, {} edges",
        result.nodes.len(),
        result.edges.len()
    );
    Ok(Json(project(&result)?))
}

// Create unified router
pub fn create_graph_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/query", post(build_query_handler))
        .route("/api/graph", post(project_graph_handler))
        .route("/api/graph/undirected", post(project_undirected_handler))
        .with_state(state)
}
