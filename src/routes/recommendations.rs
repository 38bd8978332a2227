use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;
use tokio::time::timeout;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::ArtworkSummary,
    routes::AppState,
    services::recommendations,
};

/// Response envelope for the recommendations endpoint
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub success: bool,
    pub recommendations: Vec<ArtworkSummary>,
    pub count: usize,
}

/// Handler for `GET /api/v1/recommendations/{user_id}`
///
/// The whole pipeline runs under one deadline; individual stages are not
/// bounded separately.
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Path(user_id): Path<String>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        "Processing recommendation request"
    );

    let artworks = timeout(
        state.request_timeout,
        recommendations::recommend_artworks(state.store.as_ref(), state.settings, &user_id),
    )
    .await
    .map_err(|_| AppError::Timeout)??;

    tracing::info!(
        request_id = %request_id,
        count = artworks.len(),
        "Recommendation request completed"
    );

    let count = artworks.len();
    Ok(Json(RecommendationResponse {
        success: true,
        recommendations: artworks,
        count,
    }))
}
