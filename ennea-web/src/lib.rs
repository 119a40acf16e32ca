//! ennea-web library - HTTP API for the Enneagram quiz
//!
//! Serves the question table, scores submissions, returns stored results
//! and exposes the article catalog as JSON.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::Method;
use axum::Router;
use ennea_common::articles::ArticleCatalog;
use ennea_common::db::ResultStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod pagination;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence for scored submissions
    pub results: Arc<dyn ResultStore>,
    /// Published articles and view counters
    pub articles: Arc<ArticleCatalog>,
}

impl AppState {
    pub fn new(results: Arc<dyn ResultStore>, articles: Arc<ArticleCatalog>) -> Self {
        Self { results, articles }
    }
}

/// Build application router
///
/// Requests with an unsupported method on a known path get 405 from axum.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let api = Router::new()
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/api/questions", get(api::list_questions))
        .route("/api/test/submit", post(api::submit_test))
        .route("/api/results/:id", get(api::get_result))
        .route("/api/types", get(api::list_types))
        .route("/api/types/:number", get(api::get_type))
        .route("/api/articles", get(api::list_articles))
        .route("/api/articles/:slug", get(api::get_article));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .merge(api)
        .merge(api::health_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
