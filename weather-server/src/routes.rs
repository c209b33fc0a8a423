//! Route definitions

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Build the router. Weather routes are mounted under `api_prefix`
/// (already normalized to `""` or `"/segment..."`); `/health` always sits at the root.
pub fn create_router(state: AppState, api_prefix: &str) -> Router {
    let api = Router::new()
        .route("/", get(handlers::service_info))
        .route("/weather/{city}", get(handlers::current))
        .route("/weather/{city}/temperature", get(handlers::temperature))
        .route("/weather/{city}/atmosphere", get(handlers::atmosphere))
        .route("/weather/{city}/wind", get(handlers::wind))
        .route("/weather/{city}/forecast", get(handlers::forecast));

    // axum refuses to nest at the root.
    let app = if api_prefix.is_empty() { api } else { Router::new().nest(api_prefix, api) };

    app.route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
