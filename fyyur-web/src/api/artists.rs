//! Artist pages

use axum::{
    extract::{Path, State},
    response::Html,
    Form,
};
use fyyur_common::db;
use fyyur_common::search::search_by_name;
use fyyur_common::time;
use fyyur_common::view_model::ArtistDetail;
use tracing::{debug, info, warn};

use super::parse_id;
use crate::csrf;
use crate::error::{PageError, PageResult};
use crate::forms::{self, ArtistForm, FieldErrors, FormData, CSRF_FIELD};
use crate::render::{self, FormMode};
use crate::AppState;

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> PageResult<Html<String>> {
    let artists = db::list_artists(&state.db).await?;
    Ok(Html(render::artists_page(&artists)))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let data = FormData::from(pairs);
    let term = data.get("search_term").unwrap_or_default();

    let results = search_by_name(db::list_artists(&state.db).await?, term);
    debug!("Artist search '{}' matched {}", term, results.count);

    Ok(Html(render::search_artists_page(&results, term)))
}

/// GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> PageResult<Html<String>> {
    artist_detail(&state, parse_id(&artist_id)?, None).await
}

/// GET /artists/create
pub async fn new_artist_form(State(state): State<AppState>) -> Html<String> {
    Html(render::artist_form_page(
        FormMode::Create,
        &ArtistForm::default(),
        &FieldErrors::default(),
        &csrf::issue_token(&state.config.secret_key),
    ))
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let data = FormData::from(pairs);
    let form = ArtistForm::from_data(&data);

    let fields = match forms::with_csrf(&state.config.secret_key, &data, form.validate()) {
        Ok(fields) => fields,
        Err(errors) => {
            debug!("Artist form rejected with {} error(s)", errors.len());
            return Ok(Html(render::artist_form_page(
                FormMode::Create,
                &form,
                &errors,
                &csrf::issue_token(&state.config.secret_key),
            )));
        }
    };

    let flash = match db::create_artist(&state.db, &fields).await {
        Ok(artist_id) => {
            info!("Created artist {} ({})", artist_id, fields.name);
            format!("Artist {} was successfully listed!", fields.name)
        }
        Err(e) => {
            warn!("Failed to create artist {}: {}", fields.name, e);
            format!("An error occurred. Artist {} could not be listed.", fields.name)
        }
    };

    Ok(Html(render::home_page(Some(&flash))))
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> PageResult<Html<String>> {
    let artist_id = parse_id(&artist_id)?;
    let artist = db::get_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", artist_id)))?;

    Ok(Html(render::artist_form_page(
        FormMode::Edit(artist_id),
        &ArtistForm::from(&artist),
        &FieldErrors::default(),
        &csrf::issue_token(&state.config.secret_key),
    )))
}

/// POST /artists/:artist_id/edit
pub async fn update_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let artist_id = parse_id(&artist_id)?;
    if !db::artist_exists(&state.db, artist_id).await? {
        return Err(PageError::NotFound(format!("artist {}", artist_id)));
    }

    let data = FormData::from(pairs);
    let form = ArtistForm::from_data(&data);

    let fields = match forms::with_csrf(&state.config.secret_key, &data, form.validate()) {
        Ok(fields) => fields,
        Err(errors) => {
            debug!("Artist {} edit rejected with {} error(s)", artist_id, errors.len());
            return Ok(Html(render::artist_form_page(
                FormMode::Edit(artist_id),
                &form,
                &errors,
                &csrf::issue_token(&state.config.secret_key),
            )));
        }
    };

    let flash = match db::update_artist(&state.db, artist_id, &fields).await {
        Ok(()) => {
            info!("Updated artist {} ({})", artist_id, fields.name);
            format!("Artist {} was successfully updated!", fields.name)
        }
        Err(e @ fyyur_common::Error::NotFound(_)) => return Err(e.into()),
        Err(e) => {
            warn!("Failed to update artist {}: {}", artist_id, e);
            format!("An error occurred. Artist {} could not be updated.", fields.name)
        }
    };

    artist_detail(&state, artist_id, Some(&flash)).await
}

/// GET /artists/delete/:artist_id
pub async fn confirm_delete_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> PageResult<Html<String>> {
    let artist_id = parse_id(&artist_id)?;
    let artist = db::get_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", artist_id)))?;

    Ok(Html(render::confirm_delete_page(
        "artists",
        artist_id,
        &artist.name,
        &csrf::issue_token(&state.config.secret_key),
    )))
}

/// POST /artists/:artist_id/delete
///
/// Removes the artist and every show it is booked for.
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let artist_id = parse_id(&artist_id)?;
    let data = FormData::from(pairs);
    csrf::verify_token(&state.config.secret_key, data.get(CSRF_FIELD))
        .map_err(|e| PageError::BadRequest(e.to_string()))?;

    let artist = db::get_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", artist_id)))?;

    let flash = match db::delete_artist(&state.db, artist_id).await {
        Ok(()) => {
            info!("Deleted artist {} ({})", artist_id, artist.name);
            format!("Artist {} was successfully deleted.", artist.name)
        }
        Err(e @ fyyur_common::Error::NotFound(_)) => return Err(e.into()),
        Err(e) => {
            warn!("Failed to delete artist {}: {}", artist_id, e);
            format!("An error occurred. Artist {} could not be deleted.", artist.name)
        }
    };

    Ok(Html(render::home_page(Some(&flash))))
}

async fn artist_detail(
    state: &AppState,
    artist_id: i64,
    flash: Option<&str>,
) -> PageResult<Html<String>> {
    let artist = db::get_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", artist_id)))?;
    let shows = db::shows_for_artist(&state.db, artist_id).await?;
    let detail = ArtistDetail::build(artist, shows, time::now())?;

    Ok(Html(render::artist_detail_page(
        &detail,
        flash,
        &csrf::issue_token(&state.config.secret_key),
    )))
}
