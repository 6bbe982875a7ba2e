//! HTTP route definitions.

use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::Router;
use rust_embed::RustEmbed;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{automate, chat};
use crate::state::AppState;

/// Embedded static assets (chat UI).
#[derive(RustEmbed)]
#[folder = "src/static/"]
struct StaticAssets;

/// Create the application router.
///
/// ```text
/// GET  /              - chat UI
/// GET  /health        - health check
/// POST /api/chat      - chat proxy
/// POST /api/automate  - command interpretation and dispatch
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/health", get(health_check))
        .route("/api/chat", post(chat))
        .route("/api/automate", post(automate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the index HTML page.
async fn serve_index() -> impl IntoResponse {
    match StaticAssets::get("index.html") {
        Some(content) => Html(String::from_utf8_lossy(content.data.as_ref()).to_string()),
        None => Html(default_index_html().to_string()),
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        serde_json::json!({ "status": "ok" }).to_string(),
    )
}

// Fallback if the static asset is not embedded.
fn default_index_html() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Aiva</title>
</head>
<body>
    <h1>Aiva is running!</h1>
    <p>POST /api/chat or /api/automate to talk to the assistant.</p>
</body>
</html>"#
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
