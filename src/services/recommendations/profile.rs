use std::collections::{HashMap, HashSet};

use crate::models::ArtworkSummary;

/// Canonical tag form used for affinity matching
///
/// Tags arrive as free-form user input; they are normalized once when folded
/// into the profile and once per candidate tag at scoring time, never stored
/// back.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Request-scoped summary of a user's taste, derived from their like history
///
/// Built fresh on every recommendation call and discarded afterwards; never
/// persisted or shared across requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TasteProfile {
    /// Normalized tag -> number of liked artworks carrying it
    pub tag_affinity: HashMap<String, u32>,
    /// Categories of liked artworks
    pub category_affinity: HashSet<String>,
    /// Artists whose work the user liked
    pub owner_affinity: HashSet<String>,
    /// Users who liked at least one artwork the user liked, minus the user
    pub similar_user_ids: HashSet<String>,
}

impl TasteProfile {
    /// Derives a profile from the artworks the user has liked.
    ///
    /// An empty `liked` slice yields an empty profile, which signals the
    /// cold-start path to the candidate fetcher.
    pub fn from_liked(liked: &[ArtworkSummary], user_id: &str) -> Self {
        let mut profile = TasteProfile::default();

        for artwork in liked {
            for tag in &artwork.tags {
                let tag = normalize_tag(tag);
                if tag.is_empty() {
                    continue;
                }
                *profile.tag_affinity.entry(tag).or_insert(0) += 1;
            }

            profile.category_affinity.insert(artwork.category.clone());
            profile.owner_affinity.insert(artwork.owner_id.clone());

            for liker in &artwork.liker_ids {
                if liker != user_id {
                    profile.similar_user_ids.insert(liker.clone());
                }
            }
        }

        profile
    }

    /// True when no match condition can be derived, i.e. cold start.
    pub fn is_empty(&self) -> bool {
        self.tag_affinity.is_empty()
            && self.category_affinity.is_empty()
            && self.similar_user_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn liked_artwork(id: &str, tags: &[&str], category: &str, owner: &str, likers: &[&str]) -> ArtworkSummary {
        ArtworkSummary {
            id: id.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category: category.to_string(),
            owner_id: owner.to_string(),
            liker_ids: likers.iter().map(|l| l.to_string()).collect(),
            view_count: 0,
            is_public: true,
            status: crate::models::ArtworkStatus::Published,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_history_yields_empty_profile() {
        let profile = TasteProfile::from_liked(&[], "user-1");
        assert!(profile.is_empty());
        assert!(profile.owner_affinity.is_empty());
    }

    #[test]
    fn test_tags_are_normalized_and_counted() {
        let liked = vec![
            liked_artwork("a1", &[" Abstract ", "blue"], "painting", "artist-1", &["user-1"]),
            liked_artwork("a2", &["abstract"], "painting", "artist-2", &["user-1"]),
        ];
        let profile = TasteProfile::from_liked(&liked, "user-1");

        assert_eq!(profile.tag_affinity.get("abstract"), Some(&2));
        assert_eq!(profile.tag_affinity.get("blue"), Some(&1));
        assert!(!profile.tag_affinity.contains_key(" Abstract "));
    }

    #[test]
    fn test_blank_tags_are_dropped() {
        let liked = vec![liked_artwork("a1", &["  ", "ink"], "drawing", "artist-1", &["user-1"])];
        let profile = TasteProfile::from_liked(&liked, "user-1");
        assert_eq!(profile.tag_affinity.len(), 1);
        assert!(profile.tag_affinity.contains_key("ink"));
    }

    #[test]
    fn test_category_and_owner_affinity() {
        let liked = vec![
            liked_artwork("a1", &[], "painting", "artist-1", &["user-1"]),
            liked_artwork("a2", &[], "photography", "artist-1", &["user-1"]),
        ];
        let profile = TasteProfile::from_liked(&liked, "user-1");

        assert!(profile.category_affinity.contains("painting"));
        assert!(profile.category_affinity.contains("photography"));
        assert_eq!(profile.owner_affinity.len(), 1);
        assert!(profile.owner_affinity.contains("artist-1"));
    }

    #[test]
    fn test_similar_users_exclude_requesting_user() {
        let liked = vec![
            liked_artwork("a1", &[], "painting", "artist-1", &["user-1", "user-2"]),
            liked_artwork("a2", &[], "painting", "artist-1", &["user-3", "user-1"]),
        ];
        let profile = TasteProfile::from_liked(&liked, "user-1");

        assert_eq!(profile.similar_user_ids.len(), 2);
        assert!(profile.similar_user_ids.contains("user-2"));
        assert!(profile.similar_user_ids.contains("user-3"));
        assert!(!profile.similar_user_ids.contains("user-1"));
    }
}
