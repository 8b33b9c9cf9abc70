//! Venue pages

use axum::{
    extract::{Path, State},
    response::Html,
    Form,
};
use fyyur_common::db;
use fyyur_common::search::{group_by_area, search_by_name};
use fyyur_common::time;
use fyyur_common::view_model::VenueDetail;
use tracing::{debug, info, warn};

use super::parse_id;
use crate::csrf;
use crate::error::{PageError, PageResult};
use crate::forms::{self, FieldErrors, FormData, VenueForm, CSRF_FIELD};
use crate::render::{self, FormMode};
use crate::AppState;

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> PageResult<Html<String>> {
    let venues = db::list_venues(&state.db).await?;
    Ok(Html(render::venues_page(&group_by_area(venues))))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let data = FormData::from(pairs);
    let term = data.get("search_term").unwrap_or_default();

    let results = search_by_name(db::list_venues(&state.db).await?, term);
    debug!("Venue search '{}' matched {}", term, results.count);

    Ok(Html(render::search_venues_page(&results, term)))
}

/// GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> PageResult<Html<String>> {
    venue_detail(&state, parse_id(&venue_id)?, None).await
}

/// GET /venues/create
pub async fn new_venue_form(State(state): State<AppState>) -> Html<String> {
    Html(render::venue_form_page(
        FormMode::Create,
        &VenueForm::default(),
        &FieldErrors::default(),
        &csrf::issue_token(&state.config.secret_key),
    ))
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let data = FormData::from(pairs);
    let form = VenueForm::from_data(&data);

    let fields = match forms::with_csrf(&state.config.secret_key, &data, form.validate()) {
        Ok(fields) => fields,
        Err(errors) => {
            debug!("Venue form rejected with {} error(s)", errors.len());
            return Ok(Html(render::venue_form_page(
                FormMode::Create,
                &form,
                &errors,
                &csrf::issue_token(&state.config.secret_key),
            )));
        }
    };

    let flash = match db::create_venue(&state.db, &fields).await {
        Ok(venue_id) => {
            info!("Created venue {} ({})", venue_id, fields.name);
            format!("Venue {} was successfully listed!", fields.name)
        }
        Err(e) => {
            warn!("Failed to create venue {}: {}", fields.name, e);
            format!("An error occurred. Venue {} could not be listed.", fields.name)
        }
    };

    Ok(Html(render::home_page(Some(&flash))))
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> PageResult<Html<String>> {
    let venue_id = parse_id(&venue_id)?;
    let venue = db::get_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", venue_id)))?;

    Ok(Html(render::venue_form_page(
        FormMode::Edit(venue_id),
        &VenueForm::from(&venue),
        &FieldErrors::default(),
        &csrf::issue_token(&state.config.secret_key),
    )))
}

/// POST /venues/:venue_id/edit
pub async fn update_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let venue_id = parse_id(&venue_id)?;
    if !db::venue_exists(&state.db, venue_id).await? {
        return Err(PageError::NotFound(format!("venue {}", venue_id)));
    }

    let data = FormData::from(pairs);
    let form = VenueForm::from_data(&data);

    let fields = match forms::with_csrf(&state.config.secret_key, &data, form.validate()) {
        Ok(fields) => fields,
        Err(errors) => {
            debug!("Venue {} edit rejected with {} error(s)", venue_id, errors.len());
            return Ok(Html(render::venue_form_page(
                FormMode::Edit(venue_id),
                &form,
                &errors,
                &csrf::issue_token(&state.config.secret_key),
            )));
        }
    };

    let flash = match db::update_venue(&state.db, venue_id, &fields).await {
        Ok(()) => {
            info!("Updated venue {} ({})", venue_id, fields.name);
            format!("Venue {} was successfully updated!", fields.name)
        }
        Err(e @ fyyur_common::Error::NotFound(_)) => return Err(e.into()),
        Err(e) => {
            warn!("Failed to update venue {}: {}", venue_id, e);
            format!("An error occurred. Venue {} could not be updated.", fields.name)
        }
    };

    venue_detail(&state, venue_id, Some(&flash)).await
}

/// GET /venues/delete/:venue_id
pub async fn confirm_delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> PageResult<Html<String>> {
    let venue_id = parse_id(&venue_id)?;
    let venue = db::get_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", venue_id)))?;

    Ok(Html(render::confirm_delete_page(
        "venues",
        venue_id,
        &venue.name,
        &csrf::issue_token(&state.config.secret_key),
    )))
}

/// POST /venues/:venue_id/delete
///
/// Removes the venue and every show booked at it.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let venue_id = parse_id(&venue_id)?;
    let data = FormData::from(pairs);
    csrf::verify_token(&state.config.secret_key, data.get(CSRF_FIELD))
        .map_err(|e| PageError::BadRequest(e.to_string()))?;

    let venue = db::get_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", venue_id)))?;

    let flash = match db::delete_venue(&state.db, venue_id).await {
        Ok(()) => {
            info!("Deleted venue {} ({})", venue_id, venue.name);
            format!("Venue {} was successfully deleted.", venue.name)
        }
        Err(e @ fyyur_common::Error::NotFound(_)) => return Err(e.into()),
        Err(e) => {
            warn!("Failed to delete venue {}: {}", venue_id, e);
            format!("An error occurred. Venue {} could not be deleted.", venue.name)
        }
    };

    Ok(Html(render::home_page(Some(&flash))))
}

async fn venue_detail(
    state: &AppState,
    venue_id: i64,
    flash: Option<&str>,
) -> PageResult<Html<String>> {
    let venue = db::get_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", venue_id)))?;
    let shows = db::shows_for_venue(&state.db, venue_id).await?;
    let detail = VenueDetail::build(venue, shows, time::now())?;

    Ok(Html(render::venue_detail_page(
        &detail,
        flash,
        &csrf::issue_token(&state.config.secret_key),
    )))
}
