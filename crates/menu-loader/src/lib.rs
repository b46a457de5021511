//! # Menu Loader Crate
//!
//! Loads the restaurant menu that the recommender works over.
//!
//! ## Main Components
//!
//! - **types**: `Dish` and the read-only `Catalog`
//! - **parser**: parse the JSON menu file into dishes
//! - **index**: load and validate a `Catalog`
//! - **error**: error types for menu loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use menu_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("menu.json"))?;
//! let first = catalog.get(0).unwrap();
//! println!("{} ({} / {})", first.name, first.kind, first.gravy);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{MenuLoadError, Result};
pub use types::{Catalog, Dish, DishId};
