use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

mod health;
mod menu;

pub use health::health;
pub use menu::{OverviewRequest, QueryRequest, overview, query};

/// Read-only menu query service. Every request carries its own snapshot, so
/// the router holds no state.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/menu/query", post(query))
        .route("/menu/overview", post(overview))
        .layer(TraceLayer::new_for_http())
}
