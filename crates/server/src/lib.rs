//! Server crate for the menu recommender.
//!
//! This crate wires the recommender into an axum HTTP service:
//! configuration, shared read-only state and the routes.

pub mod app;
pub mod config;
pub mod routes;

pub use app::{router, run, AppState};
pub use config::{ConfigError, ResponseShape, ServerConfig};
