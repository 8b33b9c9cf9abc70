//! Home page, listings and search results

use fyyur_common::db::{Artist, ShowListing, Venue};
use fyyur_common::search::{Area, SearchResults};

use super::{escape, format_datetime, layout, search_box, DateFormat};

pub fn home_page(flash: Option<&str>) -> String {
    let content = format!(
        r#"<h1>Fyyur</h1>
<p>Find venues to play at and artists to book, and keep track of who is playing where.</p>
<div class="card">
    <h2>Venues</h2>
    {venue_search}
    <p><a href="/venues">Browse all venues</a> or <a href="/venues/create">post a new one</a>.</p>
</div>
<div class="card">
    <h2>Artists</h2>
    {artist_search}
    <p><a href="/artists">Browse all artists</a> or <a href="/artists/create">post a new one</a>.</p>
</div>
<div class="card">
    <h2>Shows</h2>
    {show_search}
    <p><a href="/shows">See every show</a> or <a href="/shows/create">book a new one</a>.</p>
</div>"#,
        venue_search = search_box("/venues/search", "Find a venue", ""),
        artist_search = search_box("/artists/search", "Find an artist", ""),
        show_search = search_box("/shows/search", "Find a show by artist or venue", ""),
    );
    layout("Home", flash, &content)
}

/// All venues, grouped under their city and state
pub fn venues_page(areas: &[Area]) -> String {
    let mut content = format!(
        "<h1>Venues</h1>\n{}\n",
        search_box("/venues/search", "Find a venue", "")
    );

    if areas.is_empty() {
        content.push_str(r#"<p>No venues yet. <a href="/venues/create">Post the first one</a>.</p>"#);
    }

    for area in areas {
        content.push_str(&format!(
            "<section class=\"card\">\n<h2>{}, {}</h2>\n<ul>\n{}</ul>\n</section>\n",
            escape(&area.city),
            escape(&area.state),
            area.venues.iter().map(venue_item).collect::<String>(),
        ));
    }

    layout("Venues", None, &content)
}

pub fn artists_page(artists: &[Artist]) -> String {
    let items: String = artists.iter().map(artist_item).collect();
    let body = if artists.is_empty() {
        r#"<p>No artists yet. <a href="/artists/create">Post the first one</a>.</p>"#.to_string()
    } else {
        format!("<ul>\n{}</ul>", items)
    };

    let content = format!(
        "<h1>Artists</h1>\n{}\n{}",
        search_box("/artists/search", "Find an artist", ""),
        body
    );
    layout("Artists", None, &content)
}

pub fn shows_page(shows: &[ShowListing]) -> String {
    let content = format!(
        "<h1>Shows</h1>\n{}\n{}",
        search_box("/shows/search", "Find a show by artist or venue", ""),
        show_cards(shows),
    );
    layout("Shows", None, &content)
}

pub fn search_venues_page(results: &SearchResults<Venue>, term: &str) -> String {
    let content = format!(
        "{}\n{}\n<ul>\n{}</ul>",
        search_box("/venues/search", "Find a venue", term),
        results_heading(results.count, term),
        results.data.iter().map(venue_item).collect::<String>(),
    );
    layout("Venue Search", None, &content)
}

pub fn search_artists_page(results: &SearchResults<Artist>, term: &str) -> String {
    let content = format!(
        "{}\n{}\n<ul>\n{}</ul>",
        search_box("/artists/search", "Find an artist", term),
        results_heading(results.count, term),
        results.data.iter().map(artist_item).collect::<String>(),
    );
    layout("Artist Search", None, &content)
}

pub fn search_shows_page(results: &SearchResults<ShowListing>, term: &str) -> String {
    let content = format!(
        "{}\n{}\n{}",
        search_box("/shows/search", "Find a show by artist or venue", term),
        results_heading(results.count, term),
        show_cards(&results.data),
    );
    layout("Show Search", None, &content)
}

fn results_heading(count: usize, term: &str) -> String {
    format!(
        r#"<h2 class="results">Number of search results for "{}": {}</h2>"#,
        escape(term),
        count
    )
}

fn venue_item(venue: &Venue) -> String {
    format!(
        "<li><a href=\"/venues/{}\">{}</a></li>\n",
        venue.id,
        escape(&venue.name)
    )
}

fn artist_item(artist: &Artist) -> String {
    format!(
        "<li><a href=\"/artists/{}\">{}</a></li>\n",
        artist.id,
        escape(&artist.name)
    )
}

fn show_cards(shows: &[ShowListing]) -> String {
    if shows.is_empty() {
        return "<p>No shows to list.</p>".to_string();
    }

    let cards: String = shows
        .iter()
        .map(|show| {
            let image = show
                .artist_image_link
                .as_deref()
                .map(|link| format!(r#"<img src="{}" alt="">"#, escape(link)))
                .unwrap_or_default();
            format!(
                r#"<div class="card">
    {image}
    <h4><a href="/artists/{artist_id}">{artist}</a></h4>
    <p>playing at <a href="/venues/{venue_id}">{venue}</a></p>
    <p><time>{when}</time></p>
</div>
"#,
                image = image,
                artist_id = show.artist_id,
                artist = escape(&show.artist_name),
                venue_id = show.venue_id,
                venue = escape(&show.venue_name),
                when = escape(&format_datetime(&show.start_time, DateFormat::Full)),
            )
        })
        .collect();

    format!("<div class=\"shows\">\n{}</div>", cards)
}
