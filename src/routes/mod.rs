use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    db::ArtworkStore,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::recommendations::RecommendationSettings,
};

pub mod artworks;
pub mod recommendations;

/// Shared application state: the injected store plus pipeline settings
pub struct AppState {
    pub store: Arc<dyn ArtworkStore>,
    pub settings: RecommendationSettings,
    pub request_timeout: Duration,
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(make_span_with_request_id),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recommendations/:user_id", get(recommendations::recommend))
        .route("/artworks/popular", get(artworks::popular))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
