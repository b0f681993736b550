// Movie Graph - query building and visualization projection for the movie-rating graph

// Graph shapes: driver result and renderer document
pub mod models;

// Core transforms
pub mod projector;
pub mod query_builder;
pub mod undirected;

// HTTP surface
pub mod app_state;
pub mod graph_interface;

// Common utilities
pub mod config;
pub mod error;

// Re-exports for convenience
pub use error::{AppError, AppResult};
pub use projector::project;
pub use query_builder::{build_query, ComparisonOperator, MovieQuery};
pub use undirected::into_undirected;
