use crate::api::auth::auth::login;
use crate::api::ip::ip::{delete_history, list_history, lookup_current, lookup_ip};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Authentication
        .route("/auth/login", post(login))
        // Lookup and history
        .route("/ip/current", get(lookup_current))
        .route("/ip/lookup", post(lookup_ip))
        .route("/ip/history", get(list_history).delete(delete_history))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
