use crate::{error::AppResult, models::ArtworkSummary};

/// Ordering applied by the store when fetching eligible artworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateOrder {
    /// No ordering requirement; the scorer imposes the final order
    #[default]
    Unspecified,
    /// Likes descending, then views descending (cold-start fallback)
    ByPopularity,
}

/// Predicate for `find_eligible_artworks`
///
/// Public/published filtering and `exclude_ids` always apply. The three match
/// lists are OR-ed together: an artwork qualifies if any of its tags, its
/// category, or any of its likers appears in the corresponding list. When all
/// three lists are empty, every eligible artwork matches.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EligibleArtworkFilter {
    pub any_tags: Vec<String>,
    pub any_categories: Vec<String>,
    pub liked_by_any: Vec<String>,
    pub exclude_ids: Vec<String>,
    pub limit: usize,
    pub order: CandidateOrder,
}

impl EligibleArtworkFilter {
    /// Filter for the cold-start path: the most popular eligible artworks.
    pub fn most_popular(limit: usize) -> Self {
        Self {
            limit,
            order: CandidateOrder::ByPopularity,
            ..Default::default()
        }
    }

    /// True when no match condition is set, so the filter selects from the
    /// whole eligible catalog.
    pub fn matches_everything(&self) -> bool {
        self.any_tags.is_empty() && self.any_categories.is_empty() && self.liked_by_any.is_empty()
    }
}

/// Read interface over the artwork store
///
/// The recommendation core consumes exactly these two queries and treats the
/// store as an opaque external collaborator: calls may fail transiently, and
/// such failures propagate as `AppError::StoreUnavailable`/`Database` rather
/// than degrading into empty results.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ArtworkStore: Send + Sync {
    /// All artworks whose `liker_ids` contains `user_id`.
    async fn find_artworks_by_liker(&self, user_id: &str) -> AppResult<Vec<ArtworkSummary>>;

    /// Public, published artworks matching `filter`, capped at `filter.limit`.
    async fn find_eligible_artworks(
        &self,
        filter: EligibleArtworkFilter,
    ) -> AppResult<Vec<ArtworkSummary>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_popular_filter() {
        let filter = EligibleArtworkFilter::most_popular(20);
        assert_eq!(filter.limit, 20);
        assert_eq!(filter.order, CandidateOrder::ByPopularity);
        assert!(filter.matches_everything());
        assert!(filter.exclude_ids.is_empty());
    }

    #[test]
    fn test_filter_with_conditions_does_not_match_everything() {
        let filter = EligibleArtworkFilter {
            any_tags: vec!["abstract".to_string()],
            limit: 200,
            ..Default::default()
        };
        assert!(!filter.matches_everything());
    }
}
