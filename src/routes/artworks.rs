use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::{
    db::EligibleArtworkFilter,
    error::AppResult,
    middleware::request_id::RequestId,
    models::ArtworkSummary,
    routes::AppState,
};

/// Response envelope for artwork listings
#[derive(Debug, Serialize)]
pub struct ArtworkListResponse {
    pub success: bool,
    pub artworks: Vec<ArtworkSummary>,
    pub count: usize,
}

/// Handler for `GET /api/v1/artworks/popular`
///
/// The same popularity query the recommendation pipeline falls back to for
/// users without like history, exposed directly for anonymous browsing.
pub async fn popular(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<ArtworkListResponse>> {
    let artworks = state
        .store
        .find_eligible_artworks(EligibleArtworkFilter::most_popular(
            state.settings.result_limit,
        ))
        .await?;

    tracing::debug!(request_id = %request_id, count = artworks.len(), "Popular artworks served");

    let count = artworks.len();
    Ok(Json(ArtworkListResponse {
        success: true,
        artworks,
        count,
    }))
}
