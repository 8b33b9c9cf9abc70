//! HTML rendering
//!
//! Pages are assembled with `format!` around a shared layout. Every piece of
//! user-supplied text goes through [`escape`] before it is interpolated.
//!
//! # Structure
//! - **Listings** (`listings`): home, venues by area, artists, shows, search results
//! - **Detail** (`detail`): venue/artist detail with past and upcoming shows
//! - **Forms** (`forms`): create/edit forms for venues, artists and shows

mod detail;
mod forms;
mod listings;

pub use detail::{artist_detail_page, confirm_delete_page, venue_detail_page};
pub use forms::{artist_form_page, show_form_page, venue_form_page, FormMode};
pub use listings::{
    artists_page, home_page, search_artists_page, search_shows_page, search_venues_page,
    shows_page, venues_page,
};

use fyyur_common::time::parse_start_time;

/// Escape text for use in HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Display styles for show start times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Saturday May, 21, 2019 at 9:30PM`
    Full,
    /// `Sat 05, 21, 2019 9:30PM`
    Medium,
}

/// Format a stored start time for display; unparseable values come back as-is
pub fn format_datetime(value: &str, format: DateFormat) -> String {
    let pattern = match format {
        DateFormat::Full => "%A %B, %-d, %Y at %-I:%M%p",
        DateFormat::Medium => "%a %m, %d, %Y %-I:%M%p",
    };
    match parse_start_time(value) {
        Ok(instant) => instant.format(pattern).to_string(),
        Err(_) => value.to_string(),
    }
}

/// Wrap page content in the site layout
pub fn layout(title: &str, flash: Option<&str>, content: &str) -> String {
    let flash = flash
        .map(|message| format!(r#"<div class="flash" role="status">{}</div>"#, escape(message)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
    <nav>
        <a class="brand" href="/">🔥 Fyyur</a>
        <a href="/venues">Venues</a>
        <a href="/artists">Artists</a>
        <a href="/shows">Shows</a>
        <a href="/venues/create">Post a venue</a>
        <a href="/artists/create">Post an artist</a>
        <a href="/shows/create">Post a show</a>
    </nav>
    <main>
        {flash}
        {content}
    </main>
</body>
</html>
"#,
        title = escape(title),
        flash = flash,
        content = content,
    )
}

/// Inline list of genre tags
pub(crate) fn genre_tags(genres: &[String]) -> String {
    let tags: String = genres
        .iter()
        .map(|g| format!("<span>{}</span>", escape(g)))
        .collect();
    format!(r#"<div class="genres">{}</div>"#, tags)
}

/// Search box posting `search_term` to `action`
pub(crate) fn search_box(action: &str, placeholder: &str, term: &str) -> String {
    format!(
        r#"<form class="search" method="post" action="{action}">
    <input type="search" name="search_term" placeholder="{placeholder}" value="{term}">
    <button type="submit">Search</button>
</form>"#,
        action = action,
        placeholder = escape(placeholder),
        term = escape(term),
    )
}

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        None,
        r#"<h1>404</h1>
<p>The page you are looking for does not exist.</p>
<p><a href="/">Back home</a></p>"#,
    )
}

pub fn server_error_page() -> String {
    layout(
        "Server Error",
        None,
        r#"<h1>500</h1>
<p>Something went wrong on our side. Please try again later.</p>
<p><a href="/">Back home</a></p>"#,
    )
}

pub fn bad_request_page(message: &str) -> String {
    layout(
        "Bad Request",
        None,
        &format!(
            r#"<h1>400</h1>
<p>{}</p>
<p><a href="/">Back home</a></p>"#,
            escape(message)
        ),
    )
}
