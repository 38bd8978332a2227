mod artwork;

pub use artwork::{ArtworkStatus, ArtworkSummary};
