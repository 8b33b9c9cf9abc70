//! Create and edit forms
//!
//! Forms re-render with the submitted values and per-field messages when
//! validation fails.

use super::{escape, layout};
use crate::forms::{ArtistForm, FieldErrors, ShowForm, VenueForm, CSRF_FIELD, GENRES, STATES};

/// Whether a form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    fn action(self, collection: &str) -> String {
        match self {
            FormMode::Create => format!("/{}/create", collection),
            FormMode::Edit(id) => format!("/{}/{}/edit", collection, id),
        }
    }
}

pub fn venue_form_page(
    mode: FormMode,
    form: &VenueForm,
    errors: &FieldErrors,
    csrf_token: &str,
) -> String {
    let (title, heading, submit) = match mode {
        FormMode::Create => ("New Venue", "List a new venue".to_string(), "Create Venue"),
        FormMode::Edit(_) => (
            "Edit Venue",
            format!("Edit venue <em>{}</em>", escape(&form.name)),
            "Save Venue",
        ),
    };

    let fields = [
        text_field("name", "Name", &form.name, errors),
        text_field("city", "City", &form.city, errors),
        state_field(&form.state, errors),
        text_field("address", "Address", &form.address, errors),
        text_field("phone", "Phone", &form.phone, errors),
        genres_field(&form.genres, errors),
        text_field("facebook_link", "Facebook Link", &form.facebook_link, errors),
        text_field("image_link", "Image Link", &form.image_link, errors),
        text_field("website_link", "Website Link", &form.website_link, errors),
        checkbox_field("seeking_talent", "Looking for talent", form.seeking_talent),
        textarea_field("seeking_description", "Seeking Description", &form.seeking_description, errors),
    ]
    .concat();

    layout(
        title,
        None,
        &form_shell(&heading, &mode.action("venues"), &fields, submit, errors, csrf_token),
    )
}

pub fn artist_form_page(
    mode: FormMode,
    form: &ArtistForm,
    errors: &FieldErrors,
    csrf_token: &str,
) -> String {
    let (title, heading, submit) = match mode {
        FormMode::Create => ("New Artist", "List a new artist".to_string(), "Create Artist"),
        FormMode::Edit(_) => (
            "Edit Artist",
            format!("Edit artist <em>{}</em>", escape(&form.name)),
            "Save Artist",
        ),
    };

    let fields = [
        text_field("name", "Name", &form.name, errors),
        text_field("city", "City", &form.city, errors),
        state_field(&form.state, errors),
        text_field("phone", "Phone", &form.phone, errors),
        genres_field(&form.genres, errors),
        text_field("facebook_link", "Facebook Link", &form.facebook_link, errors),
        text_field("image_link", "Image Link", &form.image_link, errors),
        text_field("website_link", "Website Link", &form.website_link, errors),
        checkbox_field("seeking_venue", "Looking for venues", form.seeking_venue),
        textarea_field("seeking_description", "Seeking Description", &form.seeking_description, errors),
    ]
    .concat();

    layout(
        title,
        None,
        &form_shell(&heading, &mode.action("artists"), &fields, submit, errors, csrf_token),
    )
}

pub fn show_form_page(form: &ShowForm, errors: &FieldErrors, csrf_token: &str) -> String {
    let fields = [
        text_field("artist_id", "Artist ID", &form.artist_id, errors),
        text_field("venue_id", "Venue ID", &form.venue_id, errors),
        text_field("start_time", "Start Time (YYYY-MM-DD HH:MM:SS)", &form.start_time, errors),
    ]
    .concat();

    layout(
        "New Show",
        None,
        &form_shell("List a new show", "/shows/create", &fields, "Create Show", errors, csrf_token),
    )
}

fn form_shell(
    heading: &str,
    action: &str,
    fields: &str,
    submit: &str,
    errors: &FieldErrors,
    csrf_token: &str,
) -> String {
    let summary = if errors.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="error">Please fix the {} problem(s) below.</p>"#,
            errors.len()
        )
    };

    format!(
        r#"<h1>{heading}</h1>
{summary}
<form method="post" action="{action}">
    <input type="hidden" name="{csrf_field}" value="{csrf}">
    {csrf_error}
{fields}
    <button type="submit">{submit}</button>
</form>"#,
        heading = heading,
        summary = summary,
        action = action,
        csrf_field = CSRF_FIELD,
        csrf = escape(csrf_token),
        csrf_error = field_error(CSRF_FIELD, errors),
        fields = fields,
        submit = submit,
    )
}

fn field_error(name: &str, errors: &FieldErrors) -> String {
    errors
        .get(name)
        .map(|message| format!(r#"<div class="error">{}</div>"#, escape(message)))
        .unwrap_or_default()
}

fn text_field(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"    <div class="field">
        <label for="{name}">{label}</label>
        <input type="text" id="{name}" name="{name}" value="{value}">
        {error}
    </div>
"#,
        name = name,
        label = label,
        value = escape(value),
        error = field_error(name, errors),
    )
}

fn textarea_field(name: &str, label: &str, value: &str, errors: &FieldErrors) -> String {
    format!(
        r#"    <div class="field">
        <label for="{name}">{label}</label>
        <textarea id="{name}" name="{name}" rows="3">{value}</textarea>
        {error}
    </div>
"#,
        name = name,
        label = label,
        value = escape(value),
        error = field_error(name, errors),
    )
}

fn checkbox_field(name: &str, label: &str, checked: bool) -> String {
    format!(
        r#"    <div class="field">
        <label><input type="checkbox" name="{name}" value="y"{checked}> {label}</label>
    </div>
"#,
        name = name,
        label = label,
        checked = if checked { " checked" } else { "" },
    )
}

fn state_field(selected: &str, errors: &FieldErrors) -> String {
    let options: String = STATES
        .iter()
        .map(|state| option(state, *state == selected))
        .collect();

    format!(
        r#"    <div class="field">
        <label for="state">State</label>
        <select id="state" name="state">
            <option value="">Choose a state</option>
{options}        </select>
        {error}
    </div>
"#,
        options = options,
        error = field_error("state", errors),
    )
}

fn genres_field(selected: &[String], errors: &FieldErrors) -> String {
    let options: String = GENRES
        .iter()
        .map(|genre| option(genre, selected.iter().any(|s| s == genre)))
        .collect();

    format!(
        r#"    <div class="field">
        <label for="genres">Genres (ctrl+click to select several)</label>
        <select id="genres" name="genres" multiple size="8">
{options}        </select>
        {error}
    </div>
"#,
        options = options,
        error = field_error("genres", errors),
    )
}

fn option(value: &str, selected: bool) -> String {
    format!(
        "            <option value=\"{0}\"{1}>{0}</option>\n",
        escape(value),
        if selected { " selected" } else { "" }
    )
}
