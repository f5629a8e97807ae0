//! HTTP surface the hub calls on this domain

mod hub_routes;
mod player_routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::infrastructure::state::AppState;

pub use hub_routes::*;
pub use player_routes::*;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/newhub", post(hub_routes::register_with_hub))
        .route("/arrive", post(player_routes::arrive))
        .route("/dropped", post(player_routes::dropped))
        .route("/command", post(player_routes::command))
}

/// Assemble the full application router.
///
/// Cross-origin calls are allowed from anywhere so the game's web UI can
/// talk to any domain directly; every response carries the CORS header.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(create_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
