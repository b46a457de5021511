//! Filter to keep only dishes with the requested gravy.

use crate::query::Query;
use crate::traits::Filter;
use crate::types::ScoredDish;
use menu_loader::Catalog;
use std::sync::Arc;

/// Keeps dishes whose gravy contains the query's gravy color (case-insensitive).
pub struct GravyColorFilter {
    catalog: Arc<Catalog>,
}

impl GravyColorFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for GravyColorFilter {
    fn name(&self) -> &str {
        "GravyColorFilter"
    }

    fn apply(&self, ranked: Vec<ScoredDish>, query: &Query) -> Vec<ScoredDish> {
        ranked
            .into_iter()
            .filter(|scored| {
                self.catalog
                    .get(scored.id)
                    .is_some_and(|dish| query.matches_gravy(dish))
            })
            .collect()
    }
}
