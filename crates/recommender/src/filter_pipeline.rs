//! The FilterPipeline chains categorical filters over a ranked list.

use crate::query::Query;
use crate::traits::Filter;
use crate::types::ScoredDish;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(FoodTypeFilter::new(catalog.clone()))
///     .add_filter(GravyColorFilter::new(catalog.clone()));
///
/// let top = pipeline.apply(ranked, &query, 3);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence, then keep at most `limit` dishes.
    ///
    /// Filters only remove entries, so the result is the first `limit`
    /// dishes of `ranked` that every filter accepts.
    pub fn apply(&self, ranked: Vec<ScoredDish>, query: &Query, limit: usize) -> Vec<ScoredDish> {
        let mut current = ranked;
        for filter in &self.filters {
            let before = current.len();
            current = filter.apply(current, query);
            debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                before,
                current.len()
            );
        }
        current.truncate(limit);
        current
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
