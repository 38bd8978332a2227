use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status of an artwork
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ArtworkStatus {
    Draft,
    Published,
}

impl ArtworkStatus {
    /// Parses the status as stored in the database; unknown values are
    /// treated as drafts so they never become recommendable.
    pub fn from_store(value: &str) -> Self {
        match value {
            "published" => ArtworkStatus::Published,
            _ => ArtworkStatus::Draft,
        }
    }
}

/// Read-only summary of an artwork as returned to the client
///
/// `liker_ids` preserves like order and contains no duplicates; the store
/// guarantees both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtworkSummary {
    pub id: String,
    pub tags: Vec<String>,
    pub category: String,
    pub owner_id: String,
    pub liker_ids: Vec<String>,
    pub view_count: i64,
    pub is_public: bool,
    pub status: ArtworkStatus,
    pub created_at: DateTime<Utc>,
}

impl ArtworkSummary {
    /// An artwork may be recommended only if it is public and published.
    pub fn is_eligible(&self) -> bool {
        self.is_public && self.status == ArtworkStatus::Published
    }

    /// Number of likes this artwork has received
    pub fn like_count(&self) -> usize {
        self.liker_ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(is_public: bool, status: ArtworkStatus) -> ArtworkSummary {
        ArtworkSummary {
            id: "art-1".to_string(),
            tags: vec!["abstract".to_string()],
            category: "painting".to_string(),
            owner_id: "user-1".to_string(),
            liker_ids: vec!["user-2".to_string(), "user-3".to_string()],
            view_count: 10,
            is_public,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_eligibility_requires_public_and_published() {
        assert!(artwork(true, ArtworkStatus::Published).is_eligible());
        assert!(!artwork(false, ArtworkStatus::Published).is_eligible());
        assert!(!artwork(true, ArtworkStatus::Draft).is_eligible());
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ArtworkStatus::Published).unwrap();
        assert_eq!(json, "\"published\"");
        let json = serde_json::to_string(&ArtworkStatus::Draft).unwrap();
        assert_eq!(json, "\"draft\"");
    }

    #[test]
    fn test_status_from_store_unknown_is_draft() {
        assert_eq!(ArtworkStatus::from_store("published"), ArtworkStatus::Published);
        assert_eq!(ArtworkStatus::from_store("archived"), ArtworkStatus::Draft);
    }

    #[test]
    fn test_like_count() {
        assert_eq!(artwork(true, ArtworkStatus::Published).like_count(), 2);
    }
}
