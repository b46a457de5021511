//! Text-similarity recommender for menu dishes.
//!
//! This crate provides:
//! - `TextIndex`: vocabulary and per-dish term vectors (TF or TF-IDF)
//! - cosine scoring with a categorical fallback for empty vectors
//! - the `Filter` trait, food-type and gravy filters, and `FilterPipeline`
//! - `Recommender`, the read-only context that ties them together
//!
//! ## Example Usage
//! ```ignore
//! use recommender::{Query, Recommender, RecommenderConfig};
//!
//! let recommender = Recommender::new(catalog.clone(), RecommenderConfig::default());
//! let query = Query::new("curry", "any").with_preference("spicy egg");
//! for item in recommender.recommend(&query).items {
//!     println!("{} ({:.2})", item.dish.name, item.score);
//! }
//! ```

pub mod config;
pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod query;
pub mod similarity;
pub mod traits;
pub mod types;
pub mod vectorizer;

// Re-export main types
pub use config::{RecommenderConfig, Weighting, ZeroVectorPolicy};
pub use engine::Recommender;
pub use filter_pipeline::FilterPipeline;
pub use query::{Query, ANY};
pub use similarity::ScoreKind;
pub use traits::Filter;
pub use types::{MenuRecommendation, Recommendations, ScoredDish};
pub use vectorizer::{TermVector, TextIndex, Vocabulary};
