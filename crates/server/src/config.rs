//! Server configuration.
//!
//! Values come from an optional TOML file; anything missing falls back to
//! the defaults below. Command-line flags are applied on top by the binaries.
//!
//! ```toml
//! menu_path = "menu.json"
//! static_dir = "static"
//! index_page = "index.html"
//! bind_addr = "127.0.0.1:8000"
//! response_shape = "dishes"
//!
//! [recommender]
//! weighting = "tf_idf"
//! zero_vector = "categorical"
//! default_preference = "egg dish"
//! limit = 3
//! ```

use recommender::RecommenderConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// What each entry of `/recommend`'s `recommendations` array looks like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseShape {
    /// Full dish objects
    #[default]
    Dishes,
    /// Dish names only
    Names,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub menu_path: PathBuf,
    pub static_dir: PathBuf,
    /// Served at `/`; a JSON welcome message is returned if it is missing
    pub index_page: PathBuf,
    pub bind_addr: String,
    pub response_shape: ResponseShape,
    pub recommender: RecommenderConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            menu_path: PathBuf::from("menu.json"),
            static_dir: PathBuf::from("static"),
            index_page: PathBuf::from("index.html"),
            bind_addr: "127.0.0.1:8000".to_string(),
            response_shape: ResponseShape::default(),
            recommender: RecommenderConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Read `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
