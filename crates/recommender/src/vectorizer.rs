//! Bag-of-words vectorization of dish descriptions.
//!
//! The vocabulary and every dish vector are computed once, when the
//! `TextIndex` is built, and are never mutated afterwards. Query text is
//! projected onto the same vocabulary; words the menu never uses are dropped.

use crate::config::Weighting;
use menu_loader::Catalog;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Lowercase the text and split it on whitespace.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(str::to_lowercase)
}

/// Word → column index, in order of first appearance across the catalog.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
}

impl Vocabulary {
    pub fn build<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut index = HashMap::new();
        for text in texts {
            for word in tokenize(text) {
                let next = index.len();
                index.entry(word).or_insert(next);
            }
        }
        Self { index }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Word counts for `text`, ignoring out-of-vocabulary words.
    pub fn counts(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0; self.len()];
        for word in tokenize(text) {
            if let Some(i) = self.get(&word) {
                vector[i] += 1.0;
            }
        }
        vector
    }
}

/// A dense vector with its Euclidean norm cached.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector {
    pub values: Vec<f32>,
    pub norm: f32,
}

impl TermVector {
    pub fn new(values: Vec<f32>) -> Self {
        let norm = values.iter().map(|v| v * v).sum::<f32>().sqrt();
        Self { values, norm }
    }

    pub fn is_zero(&self) -> bool {
        self.norm == 0.0
    }
}

/// Precomputed vocabulary and per-dish vectors for a catalog.
#[derive(Debug, Clone)]
pub struct TextIndex {
    vocabulary: Vocabulary,
    /// Per-column weights; all ones for plain term frequency
    weights: Vec<f32>,
    vectors: Vec<TermVector>,
}

impl TextIndex {
    pub fn build(catalog: &Catalog, weighting: Weighting) -> Self {
        let vocabulary =
            Vocabulary::build(catalog.dishes().iter().map(|d| d.description.as_str()));

        let counts: Vec<Vec<f32>> = catalog
            .dishes()
            .par_iter()
            .map(|dish| vocabulary.counts(&dish.description))
            .collect();

        let weights = match weighting {
            Weighting::TermFrequency => vec![1.0; vocabulary.len()],
            Weighting::TfIdf => inverse_document_frequency(&counts, vocabulary.len()),
        };

        let vectors = counts
            .into_par_iter()
            .map(|row| TermVector::new(apply_weights(row, &weights)))
            .collect();

        debug!(
            terms = vocabulary.len(),
            dishes = catalog.len(),
            ?weighting,
            "Built text index"
        );

        Self {
            vocabulary,
            weights,
            vectors,
        }
    }

    /// Project free text onto the catalog vocabulary using the index weighting.
    pub fn vectorize(&self, text: &str) -> TermVector {
        TermVector::new(apply_weights(self.vocabulary.counts(text), &self.weights))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Dish vectors, in catalog order
    pub fn vectors(&self) -> &[TermVector] {
        &self.vectors
    }
}

/// Smoothed IDF: ln((1 + n) / (1 + df)) + 1
fn inverse_document_frequency(counts: &[Vec<f32>], terms: usize) -> Vec<f32> {
    let n = counts.len() as f32;
    (0..terms)
        .map(|term| {
            let df = counts.iter().filter(|row| row[term] > 0.0).count() as f32;
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        })
        .collect()
}

fn apply_weights(mut values: Vec<f32>, weights: &[f32]) -> Vec<f32> {
    for (value, weight) in values.iter_mut().zip(weights) {
        *value *= weight;
    }
    values
}
