//! HTTP server for the menu recommender.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use menu_loader::Catalog;
use recommender::Recommender;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::routes;

/// Application state shared across handlers.
///
/// Built once before the listener starts; handlers only read it.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub recommender: Recommender,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, config: ServerConfig) -> Self {
        let recommender = Recommender::new(catalog.clone(), config.recommender.clone());
        Self {
            catalog,
            recommender,
            config,
        }
    }

    /// Load the menu named in `config` and build the recommender over it.
    pub fn load(config: ServerConfig) -> Result<Self> {
        let catalog = Catalog::load_from_file(&config.menu_path)
            .with_context(|| format!("Failed to load menu {}", config.menu_path.display()))?;
        Ok(Self::new(Arc::new(catalog), config))
    }
}

/// Build the router with all routes and layers attached.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let state = Arc::new(state);

    Router::new()
        .merge(routes::page_routes())
        .merge(routes::menu_routes())
        .with_state(state)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until the process is stopped.
pub async fn run(state: AppState) -> Result<()> {
    let addr = state.config.bind_addr.clone();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builds_state_from_menu_file() {
        let dir = tempfile::tempdir().unwrap();
        let menu = dir.path().join("menu.json");
        std::fs::write(
            &menu,
            r#"[{"name": "Egg Curry", "type": "Curry", "gravy": "Red", "description": "spicy egg curry"}]"#,
        )
        .unwrap();

        let state = AppState::load(ServerConfig {
            menu_path: menu,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(state.catalog.len(), 1);
        assert_eq!(state.recommender.index().vocabulary().len(), 3);
    }

    #[test]
    fn test_load_fails_without_menu() {
        let result = AppState::load(ServerConfig {
            menu_path: "missing/menu.json".into(),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
