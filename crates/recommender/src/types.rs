//! Ranking and result types.

use crate::similarity::ScoreKind;
use menu_loader::{Dish, DishId};
use serde::Serialize;

/// A dish position paired with its similarity to the current query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDish {
    pub id: DishId,
    pub score: f32,
    pub kind: ScoreKind,
}

impl ScoredDish {
    pub fn new(id: DishId, score: f32, kind: ScoreKind) -> Self {
        Self { id, score, kind }
    }
}

/// A dish returned to the caller
#[derive(Debug, Clone, Serialize)]
pub struct MenuRecommendation {
    pub id: DishId,
    pub dish: Dish,
    pub score: f32,
    pub kind: ScoreKind,
    pub explanation: String,
}

/// Result of one recommendation request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Recommendations {
    pub items: Vec<MenuRecommendation>,
    /// True when no dish passed the filters and the first catalog
    /// entries were returned instead
    pub used_fallback: bool,
}

impl Recommendations {
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|r| r.dish.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
