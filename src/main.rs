// Movie Graph Server - query building and visualization projection over HTTP

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_graph::{app_state::AppState, config::Config, graph_interface::create_graph_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let addr = config.server_address();

    let app = create_graph_router(AppState::new(config)).layer(CorsLayer::permissive());

    info!("Movie graph server starting on http://{}", addr);
    info!("  GET  /api/health");
    info!("  POST /api/query              - Build movie query");
    info!("  POST /api/graph              - Project graph result");
    info!("  POST /api/graph/undirected   - Collapse to undirected, then project");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
