use super::{
    handlers::{distance, health},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{Router, middleware, routing::get};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Readiness
        .route("/health", get(health::health_check))
        // Distance lookup
        .route("/api/distance", get(distance::get_distance))
        .route("/api/distance/health", get(health::liveness))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
