//! Error pages for request handlers
//!
//! Handlers return [`PageResult`]; anything that escapes a handler becomes an
//! HTML error page. Validation failures and write conflicts never get here:
//! they are rendered as form errors or flash messages by the handler itself.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::render;

#[derive(Debug, Error)]
pub enum PageError {
    /// Unknown route or record (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request the handler refuses to act on (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// fyyur-common error
    #[error(transparent)]
    Common(#[from] fyyur_common::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound(_) | PageError::Common(fyyur_common::Error::NotFound(_)) => {
                (StatusCode::NOT_FOUND, Html(render::not_found_page())).into_response()
            }
            PageError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Html(render::bad_request_page(&msg))).into_response()
            }
            PageError::Common(err) => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(render::server_error_page()),
                )
                    .into_response()
            }
        }
    }
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;
