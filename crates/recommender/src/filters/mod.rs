//! Filter implementations for the ranking pipeline.
//!
//! This module contains the concrete filters that can be composed
//! into a FilterPipeline.

pub mod food_type;
pub mod gravy_color;

// Re-export for convenience
pub use food_type::FoodTypeFilter;
pub use gravy_color::GravyColorFilter;
