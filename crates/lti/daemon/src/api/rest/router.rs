//! API Router configuration

use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let api_routes = Router::new()
        // Health and status
        .route("/health", get(handlers::health_check))
        // Instances
        .route("/instances", get(handlers::list_instances))
        .route("/instances/:id_key", get(handlers::get_instance));

    // Build router with middleware
    let router = Router::new()
        .route("/basiclti", post(handlers::launch_without_widget))
        .route("/basiclti/:widget_id", post(handlers::launch_widget))
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http());

    let router = if server.enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router.with_state(state)
}
