//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to ranked dishes.

use crate::query::Query;
use crate::types::ScoredDish;

/// Core trait for filtering ranked dishes.
///
/// ## Design Note
/// - `Send + Sync` so a pipeline can live inside shared server state
/// - Filters take ownership of the ranked Vec and must preserve its order
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Keep only the dishes this filter accepts, in their existing order.
    fn apply(&self, ranked: Vec<ScoredDish>, query: &Query) -> Vec<ScoredDish>;
}
