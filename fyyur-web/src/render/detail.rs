//! Venue and artist detail pages

use fyyur_common::view_model::{ArtistDetail, ShowPartition, VenueDetail};
use fyyur_common::ShowEntry;

use super::{escape, format_datetime, genre_tags, layout, DateFormat};
use crate::forms::CSRF_FIELD;

pub fn venue_detail_page(detail: &VenueDetail, flash: Option<&str>, csrf_token: &str) -> String {
    let venue = &detail.venue;

    let seeking = if venue.seeking_talent {
        format!(
            r#"<p class="seeking"><strong>Currently seeking talent</strong><br>{}</p>"#,
            escape(&venue.seeking_description)
        )
    } else {
        r#"<p class="seeking">Not currently seeking talent</p>"#.to_string()
    };

    let content = format!(
        r#"<article class="detail">
    <h1>{name}</h1>
    <p class="subtitle">ID: {id}</p>
    {genres}
    <p>{address}<br>{city}, {state}</p>
    {contact}
    {seeking}
    {image}
    {shows}
    {actions}
</article>"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        contact = contact_block(
            venue.phone.as_deref(),
            venue.website_link.as_deref(),
            venue.facebook_link.as_deref()
        ),
        seeking = seeking,
        image = image_block(venue.image_link.as_deref()),
        shows = show_sections(&detail.shows, "artists"),
        actions = actions_block("venues", venue.id, csrf_token),
    );

    layout(&venue.name, flash, &content)
}

pub fn artist_detail_page(detail: &ArtistDetail, flash: Option<&str>, csrf_token: &str) -> String {
    let artist = &detail.artist;

    let seeking = if artist.seeking_venue {
        format!(
            r#"<p class="seeking"><strong>Currently seeking performance venues</strong><br>{}</p>"#,
            escape(&artist.seeking_description)
        )
    } else {
        r#"<p class="seeking">Not currently seeking performance venues</p>"#.to_string()
    };

    let content = format!(
        r#"<article class="detail">
    <h1>{name}</h1>
    <p class="subtitle">ID: {id}</p>
    {genres}
    <p>{city}, {state}</p>
    {contact}
    {seeking}
    {image}
    {shows}
    {actions}
</article>"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        contact = contact_block(
            artist.phone.as_deref(),
            artist.website_link.as_deref(),
            artist.facebook_link.as_deref()
        ),
        seeking = seeking,
        image = image_block(artist.image_link.as_deref()),
        shows = show_sections(&detail.shows, "venues"),
        actions = actions_block("artists", artist.id, csrf_token),
    );

    layout(&artist.name, flash, &content)
}

/// Confirmation step for the link-style delete route
pub fn confirm_delete_page(collection: &str, id: i64, name: &str, csrf_token: &str) -> String {
    let content = format!(
        r#"<h1>Delete {name}?</h1>
<p>This also removes every show booked for it. It cannot be undone.</p>
<form method="post" action="/{collection}/{id}/delete">
    <input type="hidden" name="{csrf_field}" value="{csrf}">
    <button type="submit">Delete</button>
    <a href="/{collection}/{id}">Cancel</a>
</form>"#,
        name = escape(name),
        collection = collection,
        id = id,
        csrf_field = CSRF_FIELD,
        csrf = escape(csrf_token),
    );
    layout("Confirm Delete", None, &content)
}

fn contact_block(phone: Option<&str>, website: Option<&str>, facebook: Option<&str>) -> String {
    let mut lines = Vec::new();
    if let Some(phone) = phone {
        lines.push(format!("Phone: {}", escape(phone)));
    }
    if let Some(website) = website {
        lines.push(format!(r#"<a href="{0}">{0}</a>"#, escape(website)));
    }
    if let Some(facebook) = facebook {
        lines.push(format!(r#"<a href="{0}">{0}</a>"#, escape(facebook)));
    }
    if lines.is_empty() {
        String::new()
    } else {
        format!("<p class=\"contact\">{}</p>", lines.join("<br>"))
    }
}

fn image_block(link: Option<&str>) -> String {
    link.map(|link| format!(r#"<img src="{}" alt="">"#, escape(link)))
        .unwrap_or_default()
}

/// Past and upcoming show sections; `counterpart` is the collection the
/// entries link into
fn show_sections(shows: &ShowPartition, counterpart: &str) -> String {
    format!(
        r#"<section>
    <h2>{upcoming_count} Upcoming {upcoming_label}</h2>
    {upcoming}
</section>
<section>
    <h2>{past_count} Past {past_label}</h2>
    {past}
</section>"#,
        upcoming_count = shows.upcoming_shows_count(),
        upcoming_label = show_label(shows.upcoming_shows_count()),
        upcoming = show_cards(&shows.upcoming_shows, counterpart),
        past_count = shows.past_shows_count(),
        past_label = show_label(shows.past_shows_count()),
        past = show_cards(&shows.past_shows, counterpart),
    )
}

fn show_label(count: usize) -> &'static str {
    if count == 1 {
        "Show"
    } else {
        "Shows"
    }
}

fn show_cards(entries: &[ShowEntry], counterpart: &str) -> String {
    let cards: String = entries
        .iter()
        .map(|entry| {
            format!(
                r#"<div class="card">
    {image}
    <h5><a href="/{counterpart}/{id}">{name}</a></h5>
    <h6><time>{when}</time></h6>
</div>
"#,
                image = image_block(entry.image_link.as_deref()),
                counterpart = counterpart,
                id = entry.id,
                name = escape(&entry.name),
                when = escape(&format_datetime(&entry.start_time, DateFormat::Full)),
            )
        })
        .collect();
    format!("<div class=\"shows\">\n{}</div>", cards)
}

fn actions_block(collection: &str, id: i64, csrf_token: &str) -> String {
    format!(
        r#"<div class="actions">
    <a href="/{collection}/{id}/edit">Edit</a>
    <form method="post" action="/{collection}/{id}/delete" style="display:inline">
        <input type="hidden" name="{csrf_field}" value="{csrf}">
        <button type="submit">Delete</button>
    </form>
</div>"#,
        collection = collection,
        id = id,
        csrf_field = CSRF_FIELD,
        csrf = escape(csrf_token),
    )
}
