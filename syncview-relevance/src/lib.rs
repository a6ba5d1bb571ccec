//! Text relevance for related-article search
//!
//! ## Features
//! - TF-IDF vectors fitted per request over title + summary text
//! - Cosine similarity between a target article and its candidates
//! - Thresholded, bounded related-article lists

pub mod related;
pub mod similarity;
pub mod stop_words;
pub mod vectorizer;

pub use related::{find_related_articles, related_for_request, RelatednessConfig};
pub use similarity::{cosine_similarity, SimilarityScorer};
pub use vectorizer::{TextVectorizer, TfidfMatrix};
