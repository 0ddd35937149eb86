pub mod errors;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::CrosscheckConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<CrosscheckConfig>,
}

impl AppState {
    pub fn new(config: CrosscheckConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/check", axum::routing::post(routes::check::check_documents))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
