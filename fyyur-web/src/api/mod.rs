//! HTTP handlers
//!
//! # Structure
//! - **Pages** (`pages`): home page, stylesheet, 404 fallback
//! - **Venues** (`venues`): listing, search, detail, create/edit/delete
//! - **Artists** (`artists`): listing, search, detail, create/edit/delete
//! - **Shows** (`shows`): listing, search, create
//! - **Health** (`health`): JSON liveness probe

use axum::{
    routing::{get, post},
    Router,
};

use crate::error::{PageError, PageResult};
use crate::AppState;

pub mod artists;
pub mod health;
pub mod pages;
pub mod shows;
pub mod venues;

pub use health::health_routes;
pub use pages::not_found;

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/static/app.css", get(pages::serve_app_css))
}

pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::new_venue_form).post(venues::create_venue),
        )
        .route("/venues/delete/:venue_id", get(venues::confirm_delete_venue))
        .route("/venues/:venue_id", get(venues::show_venue))
        .route(
            "/venues/:venue_id/edit",
            get(venues::edit_venue_form).post(venues::update_venue),
        )
        .route("/venues/:venue_id/delete", post(venues::delete_venue))
}

pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::new_artist_form).post(artists::create_artist),
        )
        .route("/artists/delete/:artist_id", get(artists::confirm_delete_artist))
        .route("/artists/:artist_id", get(artists::show_artist))
        .route(
            "/artists/:artist_id/edit",
            get(artists::edit_artist_form).post(artists::update_artist),
        )
        .route("/artists/:artist_id/delete", post(artists::delete_artist))
}

pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(shows::list_shows))
        .route("/shows/search", post(shows::search_shows))
        .route(
            "/shows/create",
            get(shows::new_show_form).post(shows::create_show),
        )
}

/// Parse a path id; anything that is not an integer is an unknown page
fn parse_id(raw: &str) -> PageResult<i64> {
    raw.parse()
        .map_err(|_| PageError::NotFound(format!("invalid id '{}'", raw)))
}
