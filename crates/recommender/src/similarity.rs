//! Similarity between a query vector and a dish vector.

use crate::config::ZeroVectorPolicy;
use crate::query::Query;
use crate::vectorizer::TermVector;
use menu_loader::Dish;
use serde::Serialize;

/// Which rule produced a dish's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    Cosine,
    /// Zero-magnitude vector, scored by how many filters the dish matches
    Categorical,
    /// Zero-magnitude vector with the `Zero` policy
    Zero,
}

/// dot(a, b) / (|a| * |b|). Callers must rule out zero norms first.
pub fn cosine(a: &TermVector, b: &TermVector) -> f32 {
    let dot: f32 = a.values.iter().zip(&b.values).map(|(x, y)| x * y).sum();
    dot / (a.norm * b.norm)
}

/// Score for a dish when cosine similarity is undefined.
pub fn categorical_score(query: &Query, dish: &Dish) -> f32 {
    match (query.matches_food_type(dish), query.matches_gravy(dish)) {
        (true, true) => 0.8,
        (true, false) | (false, true) => 0.5,
        (false, false) => 0.1,
    }
}

/// Score one dish, falling back to `policy` if either vector is all zeros.
pub fn score_dish(
    query: &Query,
    query_vector: &TermVector,
    dish: &Dish,
    dish_vector: &TermVector,
    policy: ZeroVectorPolicy,
) -> (f32, ScoreKind) {
    if query_vector.is_zero() || dish_vector.is_zero() {
        return match policy {
            ZeroVectorPolicy::Categorical => (categorical_score(query, dish), ScoreKind::Categorical),
            ZeroVectorPolicy::Zero => (0.0, ScoreKind::Zero),
        };
    }
    (cosine(query_vector, dish_vector), ScoreKind::Cosine)
}
