//! Filter to keep only dishes of the requested food type.

use crate::query::Query;
use crate::traits::Filter;
use crate::types::ScoredDish;
use menu_loader::Catalog;
use std::sync::Arc;

/// Keeps dishes whose type contains the query's food type (case-insensitive).
///
/// A food type of "any" keeps everything.
pub struct FoodTypeFilter {
    catalog: Arc<Catalog>,
}

impl FoodTypeFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for FoodTypeFilter {
    fn name(&self) -> &str {
        "FoodTypeFilter"
    }

    fn apply(&self, ranked: Vec<ScoredDish>, query: &Query) -> Vec<ScoredDish> {
        ranked
            .into_iter()
            .filter(|scored| {
                self.catalog
                    .get(scored.id)
                    .is_some_and(|dish| query.matches_food_type(dish))
            })
            .collect()
    }
}
