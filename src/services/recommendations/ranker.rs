use std::cmp::Ordering;

use crate::{models::ArtworkSummary, services::recommendations::scorer::ScoredCandidate};

/// Sorts scored candidates and returns the top `limit` artworks.
///
/// Order is total so results are deterministic: score descending, then like
/// count descending, then creation time descending, then id ascending. Fewer
/// than `limit` candidates returns all of them.
pub fn select(mut scored: Vec<ScoredCandidate>, limit: usize) -> Vec<ArtworkSummary> {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.artwork.like_count().cmp(&a.artwork.like_count()))
            .then_with(|| b.artwork.created_at.cmp(&a.artwork.created_at))
            .then_with(|| a.artwork.id.cmp(&b.artwork.id))
    });

    scored.truncate(limit);
    scored.into_iter().map(|c| c.artwork).collect()
}
