//! API routes for the menu recommender

use crate::app::AppState;
use crate::config::ResponseShape;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use menu_loader::Dish;
use recommender::{Query, Recommendations};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

type AppStateArc = Arc<AppState>;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub menu: Vec<Dish>,
}

/// One entry of the `recommendations` array, shaped by `ResponseShape`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendationEntry {
    Dish(Dish),
    Name(String),
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<RecommendationEntry>,
}

impl RecommendResponse {
    pub fn from_recommendations(result: Recommendations, shape: ResponseShape) -> Self {
        let recommendations = result
            .items
            .into_iter()
            .map(|item| match shape {
                ResponseShape::Dishes => RecommendationEntry::Dish(item.dish),
                ResponseShape::Names => RecommendationEntry::Name(item.dish.name),
            })
            .collect();
        Self { recommendations }
    }
}

// ============================================================================
// Landing page
// ============================================================================

pub fn page_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(index))
}

async fn index(State(state): State<AppStateArc>) -> Response {
    match tokio::fs::read_to_string(&state.config.index_page).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            debug!(
                "Index page {} unavailable ({}), sending welcome message",
                state.config.index_page.display(),
                e
            );
            Json(WelcomeResponse {
                message: "Welcome to the menu recommender".to_string(),
            })
            .into_response()
        }
    }
}

// ============================================================================
// Menu and recommendation routes
// ============================================================================

pub fn menu_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/menu", get(menu))
        .route("/recommend", post(recommend))
}

async fn menu(State(state): State<AppStateArc>) -> Json<MenuResponse> {
    Json(MenuResponse {
        menu: state.catalog.dishes().to_vec(),
    })
}

async fn recommend(
    State(state): State<AppStateArc>,
    Form(query): Form<Query>,
) -> Json<RecommendResponse> {
    let result = state.recommender.recommend(&query);
    info!(
        food_type = %query.food_type(),
        gravy_color = %query.gravy_color(),
        fallback = result.used_fallback,
        "Recommended: {}",
        result.names().join(", ")
    );

    Json(RecommendResponse::from_recommendations(
        result,
        state.config.response_shape,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::router;
    use crate::config::ServerConfig;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use menu_loader::Catalog;
    use serde_json::Value;
    use tower::ServiceExt;

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    fn build_test_catalog() -> Arc<Catalog> {
        Arc::new(Catalog::new(vec![
            Dish::new("Egg Curry", "Curry", "Red", "spicy egg curry"),
            Dish::new("Paneer Rice", "Rice", "White", "creamy paneer rice"),
            Dish::new("Veg Snack", "Snack", "None", "crispy veg snack"),
            Dish::new("Chicken Curry", "Curry", "Red", "rich chicken curry"),
        ]))
    }

    fn build_test_app(config: ServerConfig) -> Router {
        router(AppState::new(build_test_catalog(), config))
    }

    fn test_config() -> ServerConfig {
        ServerConfig {
            index_page: "does/not/exist.html".into(),
            ..Default::default()
        }
    }

    async fn read_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn recommend_request(form: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/recommend")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap()
    }

    async fn recommend_json(app: Router, form: &str) -> Value {
        let response = app.oneshot(recommend_request(form)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        read_json(response).await
    }

    // ============================================================================
    // Tests
    // ============================================================================

    #[tokio::test]
    async fn test_index_without_page_returns_welcome() {
        let app = build_test_app(test_config());
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("Welcome"));
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("index.html");
        std::fs::write(&page, "<h1>Menu</h1>").unwrap();

        let app = build_test_app(ServerConfig {
            index_page: page,
            ..Default::default()
        });
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<h1>Menu</h1>");
    }

    #[tokio::test]
    async fn test_menu_returns_full_catalog() {
        let app = build_test_app(test_config());
        let response = app
            .oneshot(Request::get("/menu").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = read_json(response).await;
        let menu = body["menu"].as_array().unwrap();
        assert_eq!(menu.len(), 4);
        assert_eq!(menu[0]["name"], "Egg Curry");
        assert_eq!(menu[0]["type"], "Curry");
    }

    #[tokio::test]
    async fn test_menu_echoes_extra_keys() {
        let mut dish = Dish::new("Egg Curry", "Curry", "Red", "spicy egg curry");
        dish.extra.insert("image".to_string(), "egg_curry.jpg".into());
        let app = router(AppState::new(Arc::new(Catalog::new(vec![dish])), test_config()));

        let response = app
            .oneshot(Request::get("/menu").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = read_json(response).await;
        assert_eq!(body["menu"][0]["image"], "egg_curry.jpg");
        assert_eq!(body["menu"][0]["name"], "Egg Curry");
    }

    #[tokio::test]
    async fn test_static_serves_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("egg_curry.jpg"), b"not really a jpeg").unwrap();

        let app = build_test_app(ServerConfig {
            static_dir: dir.path().to_path_buf(),
            ..test_config()
        });

        let response = app
            .clone()
            .oneshot(Request::get("/static/egg_curry.jpg").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"not really a jpeg");

        let missing = app
            .oneshot(Request::get("/static/missing.jpg").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_recommend_returns_dishes() {
        let app = build_test_app(test_config());
        let body = recommend_json(app, "food_type=any&gravy_color=any&preference=spicy+curry").await;

        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0]["name"], "Egg Curry");
        assert_eq!(recs[0]["gravy"], "Red");
    }

    #[tokio::test]
    async fn test_recommend_names_shape() {
        let app = build_test_app(ServerConfig {
            response_shape: ResponseShape::Names,
            ..test_config()
        });
        let body = recommend_json(app, "food_type=Curry&gravy_color=red").await;

        let recs = body["recommendations"].as_array().unwrap();
        let names: Vec<_> = recs.iter().map(|v| v.as_str().unwrap()).collect();
        assert_eq!(names, vec!["Egg Curry", "Chicken Curry"]);
    }

    #[tokio::test]
    async fn test_recommend_defaults_to_any() {
        let app = build_test_app(test_config());
        let body = recommend_json(app, "").await;
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_recommend_falls_back_to_first_dishes() {
        let app = build_test_app(ServerConfig {
            response_shape: ResponseShape::Names,
            ..test_config()
        });
        let body = recommend_json(app, "food_type=dessert&preference=creamy").await;

        let names: Vec<_> = body["recommendations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Egg Curry", "Paneer Rice", "Veg Snack"]);
    }

    #[tokio::test]
    async fn test_recommend_rejects_wrong_method() {
        let app = build_test_app(test_config());
        let response = app
            .oneshot(Request::get("/recommend").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
