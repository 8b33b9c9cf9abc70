//! Show pages

use axum::{extract::State, response::Html, Form};
use fyyur_common::db;
use fyyur_common::search::search_shows as filter_shows;
use tracing::{debug, info, warn};

use crate::csrf;
use crate::error::PageResult;
use crate::forms::{self, FieldErrors, FormData, ShowForm};
use crate::render;
use crate::AppState;

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> PageResult<Html<String>> {
    let shows = db::list_shows(&state.db).await?;
    Ok(Html(render::shows_page(&shows)))
}

/// POST /shows/search
///
/// Matches on either the artist or the venue name.
pub async fn search_shows(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let data = FormData::from(pairs);
    let term = data.get("search_term").unwrap_or_default();

    let results = filter_shows(db::list_shows(&state.db).await?, term);
    debug!("Show search '{}' matched {}", term, results.count);

    Ok(Html(render::search_shows_page(&results, term)))
}

/// GET /shows/create
pub async fn new_show_form(State(state): State<AppState>) -> Html<String> {
    Html(render::show_form_page(
        &ShowForm::default(),
        &FieldErrors::default(),
        &csrf::issue_token(&state.config.secret_key),
    ))
}

/// POST /shows/create
pub async fn create_show(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let data = FormData::from(pairs);
    let form = ShowForm::from_data(&data);

    let show = match forms::with_csrf(&state.config.secret_key, &data, form.validate()) {
        Ok(show) => show,
        Err(errors) => return Ok(rejected(&state, &form, &errors)),
    };

    let mut errors = FieldErrors::default();
    if !db::artist_exists(&state.db, show.artist_id).await? {
        errors.add("artist_id", "No artist with this ID.");
    }
    if !db::venue_exists(&state.db, show.venue_id).await? {
        errors.add("venue_id", "No venue with this ID.");
    }
    if !errors.is_empty() {
        return Ok(rejected(&state, &form, &errors));
    }

    let flash = match db::create_show(&state.db, &show).await {
        Ok(show_id) => {
            info!(
                "Created show {} (artist {} at venue {}, {})",
                show_id, show.artist_id, show.venue_id, show.start_time
            );
            "Show was successfully listed!".to_string()
        }
        Err(e) => {
            warn!("Failed to create show: {}", e);
            "An error occurred. Show could not be listed.".to_string()
        }
    };

    Ok(Html(render::home_page(Some(&flash))))
}

fn rejected(state: &AppState, form: &ShowForm, errors: &FieldErrors) -> Html<String> {
    debug!("Show form rejected with {} error(s)", errors.len());
    Html(render::show_form_page(
        form,
        errors,
        &csrf::issue_token(&state.config.secret_key),
    ))
}
