//! Core domain types for the menu.
//!
//! A menu is a flat, ordered list of dishes. Position in that list is the
//! only identity a dish has, so it doubles as the tie-breaker when two
//! dishes score the same.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Type Aliases
// =============================================================================

/// Position of a dish in the catalog (0-based, stable for the process lifetime)
pub type DishId = usize;

// =============================================================================
// Dish
// =============================================================================

/// A single menu entry.
///
/// The JSON key for the food type is `type`, which is a Rust keyword,
/// so the field is called `kind` and renamed on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    /// Food type, e.g. "Curry", "Rice", "Snack"
    #[serde(rename = "type")]
    pub kind: String,
    /// Gravy category, e.g. "Red", "White", "None"
    pub gravy: String,
    /// Free text used to build the bag-of-words vectors
    pub description: String,
    /// Any other keys in the menu entry (e.g. an image path), passed through
    /// untouched so `/menu` echoes the file
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Dish {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        gravy: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            gravy: gravy.into(),
            description: description.into(),
            extra: Map::new(),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The read-only list of dishes the service recommends from.
///
/// Built once at startup and shared behind an `Arc`; there are no mutators
/// after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub(crate) dishes: Vec<Dish>,
}

impl Catalog {
    /// Wrap an already-parsed list of dishes, keeping their order.
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    /// Get a dish by its catalog position
    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.dishes.get(id)
    }

    /// All dishes in catalog order
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// The first `n` dishes (or fewer, if the catalog is smaller).
    pub fn first_n(&self, n: usize) -> &[Dish] {
        &self.dishes[..n.min(self.dishes.len())]
    }

    /// Distinct food types in order of first appearance
    pub fn food_types(&self) -> Vec<&str> {
        distinct(self.dishes.iter().map(|d| d.kind.as_str()))
    }

    /// Distinct gravy categories in order of first appearance
    pub fn gravy_colors(&self) -> Vec<&str> {
        distinct(self.dishes.iter().map(|d| d.gravy.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
