//! Scoring configuration.

use serde::{Deserialize, Serialize};

/// How description words are weighted when vectors are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Raw word counts
    #[default]
    TermFrequency,
    /// Word counts scaled by smoothed inverse document frequency
    TfIdf,
}

/// What similarity a dish gets when the query or dish vector is all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroVectorPolicy {
    /// 0.8 if both filters match, 0.5 if one does, 0.1 otherwise
    #[default]
    Categorical,
    /// Always 0.0
    Zero,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    pub weighting: Weighting,
    pub zero_vector: ZeroVectorPolicy,
    /// Used as the query text when a request carries no preference.
    /// When unset, the text is built from the two filters.
    pub default_preference: Option<String>,
    /// Maximum number of dishes returned per request
    pub limit: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            weighting: Weighting::default(),
            zero_vector: ZeroVectorPolicy::default(),
            default_preference: None,
            limit: 3,
        }
    }
}
