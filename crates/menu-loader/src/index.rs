//! Catalog loading and validation.

use crate::error::{MenuLoadError, Result};
use crate::parser;
use crate::types::Catalog;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load a menu file into a validated catalog.
    ///
    /// This is the main entry point used at startup:
    /// 1. Parse the JSON array of dishes
    /// 2. Validate catalog-level constraints
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading menu from {}", path.display());

        let dishes = parser::parse_menu(path)?;
        let catalog = Catalog::new(dishes);
        catalog.validate()?;

        info!(
            dishes = catalog.len(),
            food_types = catalog.food_types().len(),
            gravy_colors = catalog.gravy_colors().len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Validate catalog integrity
    ///
    /// Checks that every dish has a non-blank name. Names may repeat, since a
    /// dish is identified by its position. An empty catalog is valid.
    pub fn validate(&self) -> Result<()> {
        for (position, dish) in self.dishes.iter().enumerate() {
            if dish.name.trim().is_empty() {
                return Err(MenuLoadError::InvalidValue {
                    field: "name".to_string(),
                    position,
                    value: dish.name.clone(),
                });
            }
        }
        Ok(())
    }
}
