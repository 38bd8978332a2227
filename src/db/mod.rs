pub mod postgres;
pub mod store;

pub use postgres::{create_pool, PgArtworkStore};
pub use store::{ArtworkStore, CandidateOrder, EligibleArtworkFilter};

#[cfg(test)]
pub use store::MockArtworkStore;
