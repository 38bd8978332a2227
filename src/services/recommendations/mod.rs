//! Personalized artwork recommendations
//!
//! Four stages composed strictly forward: profile builder, candidate
//! fetcher, scorer, ranker. Every call recomputes from store state; nothing
//! is cached or persisted between requests, so concurrent calls are
//! independent by construction.

pub mod candidates;
pub mod profile;
pub mod ranker;
pub mod scorer;

use crate::{
    db::{ArtworkStore, EligibleArtworkFilter},
    error::AppResult,
    models::ArtworkSummary,
};

use profile::TasteProfile;
use scorer::ScoredCandidate;

/// Tuning knobs for the recommendation pipeline
#[derive(Debug, Clone, Copy)]
pub struct RecommendationSettings {
    /// Cap on the candidate pool fetched for scoring
    pub candidate_pool_limit: usize,
    /// Maximum number of artworks returned
    pub result_limit: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            candidate_pool_limit: 200,
            result_limit: 20,
        }
    }
}

/// Produces ranked recommendations for a user.
///
/// Users with no like history (including unknown user ids) get the most
/// popular eligible artworks instead of a scored ranking; that path already
/// comes back in final order from the store. An empty result is valid, not
/// an error.
pub async fn recommend_artworks(
    store: &dyn ArtworkStore,
    settings: RecommendationSettings,
    user_id: &str,
) -> AppResult<Vec<ArtworkSummary>> {
    let liked = store.find_artworks_by_liker(user_id).await?;
    let profile = TasteProfile::from_liked(&liked, user_id);

    if profile.is_empty() {
        tracing::debug!(user_id = %user_id, "No like history, serving popular artworks");
        return store
            .find_eligible_artworks(EligibleArtworkFilter::most_popular(settings.result_limit))
            .await;
    }

    let exclude_ids: Vec<String> = liked.iter().map(|a| a.id.clone()).collect();
    let pool = candidates::fetch_candidates(
        store,
        &profile,
        exclude_ids,
        settings.candidate_pool_limit,
    )
    .await?;

    tracing::debug!(
        user_id = %user_id,
        liked_count = liked.len(),
        candidate_count = pool.len(),
        "Scoring candidate pool"
    );

    let scored: Vec<ScoredCandidate> = pool
        .into_iter()
        .map(|artwork| ScoredCandidate {
            score: scorer::score(&artwork, &profile),
            artwork,
        })
        .collect();

    Ok(ranker::select(scored, settings.result_limit))
}
