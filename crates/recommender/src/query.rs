//! The per-request query and its categorical matching rules.

use menu_loader::Dish;
use serde::Deserialize;

/// Filter value that matches every dish.
pub const ANY: &str = "any";

/// A single recommendation request.
///
/// Filters are stored lowercased and trimmed so that "Curry" and "curry"
/// behave identically everywhere downstream. Fields are private so the only
/// ways in are `Query::new` and deserialization, both of which normalize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Query {
    #[serde(default = "default_filter", deserialize_with = "normalize_filter")]
    food_type: String,
    #[serde(default = "default_filter", deserialize_with = "normalize_filter")]
    gravy_color: String,
    #[serde(default)]
    preference: Option<String>,
}

fn default_filter() -> String {
    ANY.to_string()
}

fn normalize_filter<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(normalize(&raw))
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

impl Query {
    pub fn new(food_type: &str, gravy_color: &str) -> Self {
        Self {
            food_type: normalize(food_type),
            gravy_color: normalize(gravy_color),
            preference: None,
        }
    }

    /// Query that accepts every dish.
    pub fn any() -> Self {
        Self::new(ANY, ANY)
    }

    pub fn with_preference(mut self, preference: impl Into<String>) -> Self {
        self.preference = Some(preference.into());
        self
    }

    pub fn food_type(&self) -> &str {
        &self.food_type
    }

    pub fn gravy_color(&self) -> &str {
        &self.gravy_color
    }

    pub fn preference(&self) -> Option<&str> {
        self.preference.as_deref()
    }

    /// Text used when no preference was given: the two filters joined.
    pub fn filter_text(&self) -> String {
        format!("{} {}", self.food_type, self.gravy_color)
    }

    /// True if the dish's type contains the food-type filter, or the filter is "any".
    pub fn matches_food_type(&self, dish: &Dish) -> bool {
        self.food_type == ANY || dish.kind.to_lowercase().contains(&self.food_type)
    }

    /// True if the dish's gravy contains the gravy filter, or the filter is "any".
    pub fn matches_gravy(&self, dish: &Dish) -> bool {
        self.gravy_color == ANY || dish.gravy.to_lowercase().contains(&self.gravy_color)
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        self.matches_food_type(dish) && self.matches_gravy(dish)
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::any()
    }
}
