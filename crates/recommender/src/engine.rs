//! # Recommender
//!
//! Turns a query into a short ranked list of dishes:
//! 1. Pick the query text (preference, configured default, or filter text)
//! 2. Vectorize it against the catalog vocabulary
//! 3. Score every dish (cosine, or the zero-vector policy)
//! 4. Stable sort by descending score
//! 5. Apply the categorical filters and keep the top `limit`
//! 6. If nothing survives, return the first `limit` catalog entries
//!
//! Everything except the query is built in `Recommender::new` and never
//! mutated, so one instance can be shared across request handlers.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;

use menu_loader::{Catalog, Dish};
use tracing::{debug, info};

use crate::config::RecommenderConfig;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::{FoodTypeFilter, GravyColorFilter};
use crate::query::Query;
use crate::similarity::{score_dish, ScoreKind};
use crate::types::{MenuRecommendation, Recommendations, ScoredDish};
use crate::vectorizer::TextIndex;

/// Read-only recommendation context built once at startup.
pub struct Recommender {
    catalog: Arc<Catalog>,
    index: TextIndex,
    filter_pipeline: FilterPipeline,
    config: RecommenderConfig,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>, config: RecommenderConfig) -> Self {
        let start = Instant::now();
        let index = TextIndex::build(&catalog, config.weighting);
        let filter_pipeline = FilterPipeline::new()
            .add_filter(FoodTypeFilter::new(catalog.clone()))
            .add_filter(GravyColorFilter::new(catalog.clone()));

        info!(
            dishes = catalog.len(),
            terms = index.vocabulary().len(),
            weighting = ?config.weighting,
            "Recommender ready in {:.2?}",
            start.elapsed()
        );

        Self {
            catalog,
            index,
            filter_pipeline,
            config,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn index(&self) -> &TextIndex {
        &self.index
    }

    /// Text the query is vectorized from.
    pub fn query_text(&self, query: &Query) -> String {
        match (query.preference(), &self.config.default_preference) {
            (Some(preference), _) => preference.to_string(),
            (None, Some(default)) => default.clone(),
            (None, None) => query.filter_text(),
        }
    }

    /// Score every dish and sort by descending score.
    ///
    /// Ties keep catalog order; NaN compares equal to everything.
    pub fn rank(&self, query: &Query) -> Vec<ScoredDish> {
        let query_vector = self.index.vectorize(&self.query_text(query));

        let mut scored: Vec<ScoredDish> = self
            .catalog
            .dishes()
            .iter()
            .zip(self.index.vectors())
            .enumerate()
            .map(|(id, (dish, dish_vector))| {
                let (score, kind) =
                    score_dish(query, &query_vector, dish, dish_vector, self.config.zero_vector);
                ScoredDish::new(id, score, kind)
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored
    }

    /// Main entry point: recommend up to `limit` dishes for a query.
    pub fn recommend(&self, query: &Query) -> Recommendations {
        let limit = self.config.limit;
        let ranked = self.rank(query);
        let selected = self.filter_pipeline.apply(ranked.clone(), query, limit);

        let used_fallback = selected.is_empty();
        let items = if used_fallback {
            self.first_entries(&ranked, limit)
        } else {
            selected
                .into_iter()
                .filter_map(|scored| {
                    let dish = self.catalog.get(scored.id)?;
                    Some(to_recommendation(scored, dish, false))
                })
                .collect()
        };

        if used_fallback {
            info!(
                food_type = %query.food_type(),
                gravy_color = %query.gravy_color(),
                "No dish matched the filters, returning first {} catalog entries",
                items.len()
            );
        } else {
            debug!(
                food_type = %query.food_type(),
                gravy_color = %query.gravy_color(),
                "Recommended {} dishes",
                items.len()
            );
        }

        Recommendations {
            items,
            used_fallback,
        }
    }

    /// The first `limit` catalog entries, whatever the filters say, carrying
    /// the scores they got in `ranked`.
    fn first_entries(&self, ranked: &[ScoredDish], limit: usize) -> Vec<MenuRecommendation> {
        self.catalog
            .first_n(limit)
            .iter()
            .enumerate()
            .map(|(id, dish)| {
                let scored = ranked
                    .iter()
                    .find(|s| s.id == id)
                    .copied()
                    .unwrap_or(ScoredDish::new(id, 0.0, ScoreKind::Zero));
                to_recommendation(scored, dish, true)
            })
            .collect()
    }
}

fn to_recommendation(scored: ScoredDish, dish: &Dish, used_fallback: bool) -> MenuRecommendation {
    MenuRecommendation {
        id: scored.id,
        dish: dish.clone(),
        score: scored.score,
        kind: scored.kind,
        explanation: explain(&scored, used_fallback),
    }
}

fn explain(scored: &ScoredDish, used_fallback: bool) -> String {
    if used_fallback {
        return "No dish matched the filters; showing a menu default".to_string();
    }
    match scored.kind {
        ScoreKind::Cosine => format!("Text similarity {:.2}", scored.score),
        ScoreKind::Categorical => format!("Filter match score {:.2}", scored.score),
        ScoreKind::Zero => "No text overlap with the preference".to_string(),
    }
}
