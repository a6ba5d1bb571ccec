//! Recommendation services for the SyncView news service
//!
//! This crate turns a batch of aggregated headlines into a short,
//! explainable reading list: a couple of articles matching the user's
//! declared interest followed by the freshest, most positive of the rest.

pub mod candidate;
pub mod engine;
pub mod interest;
pub mod popularity;
pub mod published;

pub use candidate::ScoredCandidate;
pub use engine::{EngineConfig, RecommendationEngine};
pub use interest::InterestMatcher;
pub use popularity::PopularityScorer;
pub use published::PublishedAt;
