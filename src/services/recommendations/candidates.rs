use crate::{
    db::{ArtworkStore, EligibleArtworkFilter},
    error::AppResult,
    models::ArtworkSummary,
    services::recommendations::profile::TasteProfile,
};

/// Fetches the candidate pool for a user with a non-empty taste profile.
///
/// Recall is deliberately broad: an artwork qualifies if it matches any
/// profile tag, any profile category, or was liked by any similar user.
/// Precision comes later from the scorer. `exclude_ids` carries the user's
/// already-liked artwork ids so nothing is re-recommended.
pub async fn fetch_candidates(
    store: &dyn ArtworkStore,
    profile: &TasteProfile,
    exclude_ids: Vec<String>,
    pool_limit: usize,
) -> AppResult<Vec<ArtworkSummary>> {
    let filter = EligibleArtworkFilter {
        any_tags: profile.tag_affinity.keys().cloned().collect(),
        any_categories: profile.category_affinity.iter().cloned().collect(),
        liked_by_any: profile.similar_user_ids.iter().cloned().collect(),
        exclude_ids,
        limit: pool_limit,
        ..Default::default()
    };

    store.find_eligible_artworks(filter).await
}
