use crate::{
    models::ArtworkSummary,
    services::recommendations::profile::{normalize_tag, TasteProfile},
};

/// Per matching tag, unbounded count
pub const TAG_MATCH_WEIGHT: f64 = 2.0;
/// Flat bonus when the candidate's category is one the user has liked
pub const CATEGORY_MATCH_WEIGHT: f64 = 3.0;
/// Flat bonus when the candidate is by an artist the user has liked
pub const OWNER_AFFINITY_WEIGHT: f64 = 1.0;
/// Per candidate liker who also liked something the user liked
pub const SOCIAL_PROOF_WEIGHT: f64 = 1.5;

/// A candidate paired with its affinity score, consumed by the ranker
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub artwork: ArtworkSummary,
    pub score: f64,
}

/// Computes the affinity score of a candidate against a taste profile.
///
/// A plain weighted sum with no normalization: scores are comparable only
/// within one request's candidate pool. Zero is a valid score; candidates
/// that match nothing simply rank last.
pub fn score(artwork: &ArtworkSummary, profile: &TasteProfile) -> f64 {
    let mut total = 0.0;

    for tag in &artwork.tags {
        if profile.tag_affinity.contains_key(&normalize_tag(tag)) {
            total += TAG_MATCH_WEIGHT;
        }
    }

    if profile.category_affinity.contains(&artwork.category) {
        total += CATEGORY_MATCH_WEIGHT;
    }

    if profile.owner_affinity.contains(&artwork.owner_id) {
        total += OWNER_AFFINITY_WEIGHT;
    }

    let social_proof = artwork
        .liker_ids
        .iter()
        .filter(|liker| profile.similar_user_ids.contains(*liker))
        .count();
    total += SOCIAL_PROOF_WEIGHT * social_proof as f64;

    total
}
