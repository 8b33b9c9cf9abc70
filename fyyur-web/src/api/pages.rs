//! Home page, stylesheet and 404 fallback

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::render;

const APP_CSS: &str = include_str!("../../static/app.css");

/// GET /
pub async fn home() -> Html<String> {
    Html(render::home_page(None))
}

/// GET /static/app.css
pub async fn serve_app_css() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], APP_CSS).into_response()
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> Response {
    debug!("No route for {}", uri);
    (StatusCode::NOT_FOUND, Html(render::not_found_page())).into_response()
}
