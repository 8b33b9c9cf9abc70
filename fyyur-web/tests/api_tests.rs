//! Integration tests for the fyyur HTTP surface
//!
//! Tests cover:
//! - Health endpoint, home page, stylesheet and 404 fallback
//! - Venue listing by area, search, detail, create/edit/delete
//! - Artist listing, search, detail, create/edit/delete
//! - Show listing, search and create with existence checks
//! - CSRF enforcement and HTML escaping
//! - Failed database writes roll back and show an error flash
//!
//! Every test runs against its own in-memory database.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use fyyur_common::config::Config;
use fyyur_common::db::{self, init_database, seed_sample_data};
use fyyur_web::{build_router, csrf, AppState};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

const SECRET: &str = "integration-test-secret";

/// Test helper: Create app over an empty in-memory database
async fn setup_app() -> (Router, AppState) {
    let config = Config::in_memory(SECRET);
    let pool = init_database(&config.database_url)
        .await
        .expect("Should open in-memory database");
    let state = AppState::new(pool, config);
    (build_router(state.clone()), state)
}

/// Test helper: Create app with the sample venues, artists and shows loaded
async fn setup_seeded_app() -> (Router, AppState) {
    let (app, state) = setup_app().await;
    seed_sample_data(&state.db).await.expect("Should seed sample data");
    (app, state)
}

/// Test helper: Create request without a body
fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create url-encoded form POST
fn form_request(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn encode(text: &str) -> String {
    text.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}

/// Test helper: Extract body as text
async fn extract_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, extract_text(response).await)
}

fn token() -> String {
    csrf::issue_token(SECRET)
}

fn venue_fields<'a>(name: &'a str, token: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("csrf_token", token),
        ("name", name),
        ("city", "Oakland"),
        ("state", "CA"),
        ("address", "500 Grand Ave"),
        ("phone", "510-555-0100"),
        ("genres", "Jazz"),
        ("genres", "Blues"),
        ("website_link", "https://example.com"),
        ("seeking_talent", "y"),
        ("seeking_description", ""),
    ]
}

fn artist_fields<'a>(name: &'a str, token: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("csrf_token", token),
        ("name", name),
        ("city", "Austin"),
        ("state", "TX"),
        ("genres", "Country"),
        ("genres", "Folk"),
        ("seeking_description", "Open to weekend gigs"),
    ]
}

// =============================================================================
// Health, Home, Static, Fallback
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _state) = setup_app().await;

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "fyyur");
    assert_eq!(body["database"], "ok");
    assert!(body["version"].is_string());
    assert!(!body["git_hash"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_home_page_is_html() {
    let (app, _state) = setup_app().await;

    let response = app.oneshot(test_request("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers().get("content-type").unwrap();
    assert!(content_type.to_str().unwrap().contains("text/html"));

    let body = extract_text(response).await;
    assert!(body.contains("<title>Home | Fyyur</title>"));
    assert!(body.contains(r#"action="/venues/search""#));
}

#[tokio::test]
async fn test_stylesheet_served() {
    let (app, _state) = setup_app().await;

    let response = app.oneshot(test_request("GET", "/static/app.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("content-type").unwrap(), "text/css");
}

#[tokio::test]
async fn test_unknown_route_is_404_page() {
    let (app, _state) = setup_app().await;

    let (status, body) = send(&app, test_request("GET", "/no/such/page")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("404"));
}

// =============================================================================
// Venues
// =============================================================================

#[tokio::test]
async fn test_venues_grouped_by_area() {
    let (app, _state) = setup_seeded_app().await;

    let (status, body) = send(&app, test_request("GET", "/venues")).await;
    assert_eq!(status, StatusCode::OK);

    let sf = body.find("San Francisco, CA").expect("SF area listed");
    let ny = body.find("New York, NY").expect("NY area listed");
    assert!(sf < ny, "areas keep first-seen order");
    assert_eq!(body.matches("San Francisco, CA").count(), 1);
    assert!(body.contains("Park Square Live Music &amp; Coffee"));
}

#[tokio::test]
async fn test_venue_search_substring() {
    let (app, _state) = setup_seeded_app().await;

    let (status, body) = send(&app, form_request("/venues/search", &[("search_term", "Hop")])).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"Number of search results for "Hop": 1"#));
    assert!(body.contains("The Musical Hop"));
    assert!(!body.contains("Park Square"));

    let (_, body) = send(&app, form_request("/venues/search", &[("search_term", "music")])).await;
    assert!(body.contains(r#"Number of search results for "music": 2"#));
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Park Square Live Music"));
}

#[tokio::test]
async fn test_venue_search_empty_term_matches_all() {
    let (app, _state) = setup_seeded_app().await;

    let (_, body) = send(&app, form_request("/venues/search", &[("search_term", "")])).await;
    assert!(body.contains(r#"Number of search results for "": 3"#));
}

#[tokio::test]
async fn test_venue_detail_partitions_shows() {
    let (app, _state) = setup_seeded_app().await;

    // Park Square: one 2019 show, three 2035 shows
    let (status, body) = send(&app, test_request("GET", "/venues/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("3 Upcoming Shows"));
    assert!(body.contains("1 Past Show"));
    assert!(body.contains(r#"href="/artists/3""#));
    assert!(body.contains("Not currently seeking talent"));

    let (_, body) = send(&app, test_request("GET", "/venues/1")).await;
    assert!(body.contains("0 Upcoming Shows"));
    assert!(body.contains("1 Past Show"));
    assert!(body.contains("Currently seeking talent"));
}

#[tokio::test]
async fn test_venue_detail_unknown_id() {
    let (app, _state) = setup_seeded_app().await;

    let (status, _) = send(&app, test_request("GET", "/venues/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, test_request("GET", "/venues/abc")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_venue_detail_malformed_timestamp_is_500() {
    let (app, state) = setup_seeded_app().await;

    sqlx::query("UPDATE shows SET start_time = 'not-a-date' WHERE id = 1")
        .execute(&state.db)
        .await
        .unwrap();

    let (status, body) = send(&app, test_request("GET", "/venues/1")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("500"));
}

#[tokio::test]
async fn test_create_venue_form_has_token() {
    let (app, _state) = setup_app().await;

    let (status, body) = send(&app, test_request("GET", "/venues/create")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"name="csrf_token""#));
    assert!(body.contains(r#"action="/venues/create""#));
}

#[tokio::test]
async fn test_create_venue_success() {
    let (app, state) = setup_app().await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request("/venues/create", &venue_fields("The Blue Room", &token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Venue The Blue Room was successfully listed!"));

    let venues = db::list_venues(&state.db).await.unwrap();
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].genres, vec!["Jazz", "Blues"]);
    assert!(venues[0].seeking_talent);
    assert_eq!(
        venues[0].seeking_description,
        db::DEFAULT_VENUE_SEEKING_DESCRIPTION
    );
}

#[tokio::test]
async fn test_create_venue_validation_failure_rerenders() {
    let (app, state) = setup_app().await;
    let token = token();

    let mut fields = venue_fields("", &token);
    fields.retain(|(k, _)| *k != "genres");

    let (status, body) = send(&app, form_request("/venues/create", &fields)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("This field is required."));
    assert!(body.contains("Select at least one genre."));
    // Submitted values survive the round trip
    assert!(body.contains(r#"value="500 Grand Ave""#));

    assert!(db::list_venues(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_venue_without_csrf_token_rejected() {
    let (app, state) = setup_app().await;

    let mut fields = venue_fields("The Blue Room", "");
    fields.retain(|(k, _)| *k != "csrf_token");

    let (status, body) = send(&app, form_request("/venues/create", &fields)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("The CSRF token is missing."));
    assert!(db::list_venues(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_venue_with_forged_token_rejected() {
    let (app, state) = setup_app().await;
    let forged = csrf::issue_token("some-other-secret");

    let (_, body) = send(
        &app,
        form_request("/venues/create", &venue_fields("The Blue Room", &forged)),
    )
    .await;
    assert!(body.contains("The CSRF token is invalid."));
    assert!(db::list_venues(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_venue_names_are_escaped() {
    let (app, _state) = setup_app().await;
    let token = token();

    send(
        &app,
        form_request("/venues/create", &venue_fields("<script>alert(1)</script>", &token)),
    )
    .await;

    let (_, body) = send(&app, test_request("GET", "/venues")).await;
    assert!(body.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!body.contains("<script>alert(1)</script>"));
}

#[tokio::test]
async fn test_edit_venue_prefills_form() {
    let (app, _state) = setup_seeded_app().await;

    let (status, body) = send(&app, test_request("GET", "/venues/1/edit")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="The Musical Hop""#));
    assert!(body.contains(r#"<option value="Swing" selected>Swing</option>"#));
    assert!(body.contains(r#"action="/venues/1/edit""#));
}

#[tokio::test]
async fn test_edit_venue_updates_and_keeps_shows() {
    let (app, state) = setup_seeded_app().await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request("/venues/3/edit", &venue_fields("Park Square Revival", &token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Venue Park Square Revival was successfully updated!"));
    assert!(body.contains("3 Upcoming Shows"));

    let venue = db::get_venue(&state.db, 3).await.unwrap().unwrap();
    assert_eq!(venue.name, "Park Square Revival");
    assert_eq!(venue.city, "Oakland");
    assert_eq!(venue.genres, vec!["Jazz", "Blues"]);
}

#[tokio::test]
async fn test_edit_unknown_venue_is_404() {
    let (app, _state) = setup_app().await;
    let token = token();

    let (status, _) = send(&app, test_request("GET", "/venues/42/edit")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        form_request("/venues/42/edit", &venue_fields("Nowhere", &token)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_venue_cascades_shows() {
    let (app, state) = setup_seeded_app().await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request("/venues/3/delete", &[("csrf_token", token.as_str())]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Venue Park Square Live Music &amp; Coffee was successfully deleted."));

    assert!(db::get_venue(&state.db, 3).await.unwrap().is_none());
    assert_eq!(db::list_shows(&state.db).await.unwrap().len(), 1);
    // The artists stay
    assert_eq!(db::list_artists(&state.db).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_delete_venue_requires_token() {
    let (app, state) = setup_seeded_app().await;

    let (status, _) = send(&app, form_request("/venues/1/delete", &[])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(db::get_venue(&state.db, 1).await.unwrap().is_some());
}

#[tokio::test]
async fn test_delete_unknown_venue_is_404() {
    let (app, _state) = setup_app().await;
    let token = token();

    let (status, _) = send(
        &app,
        form_request("/venues/7/delete", &[("csrf_token", token.as_str())]),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_link_shows_confirmation() {
    let (app, state) = setup_seeded_app().await;

    let (status, body) = send(&app, test_request("GET", "/venues/delete/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Delete The Dueling Pianos Bar?"));
    assert!(body.contains(r#"action="/venues/2/delete""#));

    // Nothing is removed until the confirmation is posted
    assert!(db::get_venue(&state.db, 2).await.unwrap().is_some());
}

// =============================================================================
// Artists
// =============================================================================

#[tokio::test]
async fn test_artists_listing() {
    let (app, _state) = setup_seeded_app().await;

    let (status, body) = send(&app, test_request("GET", "/artists")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<a href="/artists/1">Guns N Petals</a>"#));
    assert!(body.contains(r#"<a href="/artists/3">The Wild Sax Band</a>"#));
}

#[tokio::test]
async fn test_artist_search_case_insensitive() {
    let (app, _state) = setup_seeded_app().await;

    let (_, body) = send(&app, form_request("/artists/search", &[("search_term", "A")])).await;
    assert!(body.contains(r#"Number of search results for "A": 3"#));

    let (_, body) = send(&app, form_request("/artists/search", &[("search_term", "band")])).await;
    assert!(body.contains(r#"Number of search results for "band": 1"#));
    assert!(body.contains("The Wild Sax Band"));
}

#[tokio::test]
async fn test_artist_detail_partitions_shows() {
    let (app, _state) = setup_seeded_app().await;

    let (status, body) = send(&app, test_request("GET", "/artists/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("3 Upcoming Shows"));
    assert!(body.contains("0 Past Shows"));
    assert!(body.contains(r#"href="/venues/3""#));

    let (_, body) = send(&app, test_request("GET", "/artists/1")).await;
    assert!(body.contains("0 Upcoming Shows"));
    assert!(body.contains("1 Past Show"));
    assert!(body.contains("Currently seeking performance venues"));
    assert!(body.contains("Tuesday May, 21, 2019 at 9:30PM"));
}

#[tokio::test]
async fn test_create_artist_success() {
    let (app, state) = setup_app().await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request("/artists/create", &artist_fields("The Lonesome Pines", &token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Artist The Lonesome Pines was successfully listed!"));

    let artists = db::list_artists(&state.db).await.unwrap();
    assert_eq!(artists.len(), 1);
    assert_eq!(artists[0].genres, vec!["Country", "Folk"]);
    assert!(!artists[0].seeking_venue);
    assert_eq!(artists[0].seeking_description, "Open to weekend gigs");
}

#[tokio::test]
async fn test_create_artist_rejects_unknown_state() {
    let (app, state) = setup_app().await;
    let token = token();

    let mut fields = artist_fields("The Lonesome Pines", &token);
    fields.retain(|(k, _)| *k != "state");
    fields.push(("state", "XX"));

    let (status, body) = send(&app, form_request("/artists/create", &fields)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Not a valid choice."));
    assert!(db::list_artists(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_artist() {
    let (app, state) = setup_seeded_app().await;
    let token = token();

    let (_, form) = send(&app, test_request("GET", "/artists/2/edit")).await;
    assert!(form.contains(r#"value="Matt Quevedo""#));

    let (status, body) = send(
        &app,
        form_request("/artists/2/edit", &artist_fields("Matt Quevedo Trio", &token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Artist Matt Quevedo Trio was successfully updated!"));

    let artist = db::get_artist(&state.db, 2).await.unwrap().unwrap();
    assert_eq!(artist.name, "Matt Quevedo Trio");
    assert_eq!(artist.state, "TX");
}

#[tokio::test]
async fn test_delete_artist_cascades_shows() {
    let (app, state) = setup_seeded_app().await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request("/artists/3/delete", &[("csrf_token", token.as_str())]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Artist The Wild Sax Band was successfully deleted."));

    assert_eq!(db::list_shows(&state.db).await.unwrap().len(), 2);
    assert_eq!(db::list_venues(&state.db).await.unwrap().len(), 3);
}

// =============================================================================
// Shows
// =============================================================================

#[tokio::test]
async fn test_shows_listing() {
    let (app, _state) = setup_seeded_app().await;

    let (status, body) = send(&app, test_request("GET", "/shows")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("playing at").count(), 5);
    assert!(body.contains("Tuesday May, 21, 2019 at 9:30PM"));
}

#[tokio::test]
async fn test_show_search_matches_artist_or_venue() {
    let (app, _state) = setup_seeded_app().await;

    let (_, body) = send(&app, form_request("/shows/search", &[("search_term", "park square")])).await;
    assert!(body.contains(r#"Number of search results for "park square": 4"#));

    let (_, body) = send(&app, form_request("/shows/search", &[("search_term", "petals")])).await;
    assert!(body.contains(r#"Number of search results for "petals": 1"#));
}

#[tokio::test]
async fn test_create_show_success() {
    let (app, state) = setup_seeded_app().await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request(
            "/shows/create",
            &[
                ("csrf_token", token.as_str()),
                ("artist_id", "1"),
                ("venue_id", "2"),
                ("start_time", "2036-01-01 20:00:00"),
            ],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Show was successfully listed!"));

    let (_, detail) = send(&app, test_request("GET", "/venues/2")).await;
    assert!(detail.contains("1 Upcoming Show"));
    assert!(detail.contains("Guns N Petals"));

    assert_eq!(db::list_shows(&state.db).await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_create_show_unknown_ids_rejected() {
    let (app, state) = setup_seeded_app().await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request(
            "/shows/create",
            &[
                ("csrf_token", token.as_str()),
                ("artist_id", "77"),
                ("venue_id", "88"),
                ("start_time", "2036-01-01 20:00:00"),
            ],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No artist with this ID."));
    assert!(body.contains("No venue with this ID."));
    assert_eq!(db::list_shows(&state.db).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_show_bad_start_time_rejected() {
    let (app, state) = setup_seeded_app().await;
    let token = token();

    let (_, body) = send(
        &app,
        form_request(
            "/shows/create",
            &[
                ("csrf_token", token.as_str()),
                ("artist_id", "1"),
                ("venue_id", "1"),
                ("start_time", "01/01/2036 8pm"),
            ],
        ),
    )
    .await;
    assert!(body.contains("Not a valid datetime value"));
    assert!(body.contains(r#"value="01/01/2036 8pm""#));
    assert_eq!(db::list_shows(&state.db).await.unwrap().len(), 5);
}

// =============================================================================
// Failed Writes
// =============================================================================

/// Test helper: Make every `event` on `table` fail inside the database
async fn reject_writes(state: &AppState, table: &str, event: &str) {
    sqlx::query(&format!(
        "CREATE TRIGGER reject_{table}_{event} BEFORE {event} ON {table} \
         BEGIN SELECT RAISE(ABORT, 'write rejected'); END"
    ))
    .execute(&state.db)
    .await
    .expect("Should create trigger");
}

#[tokio::test]
async fn test_create_venue_write_failure_flashes_error() {
    let (app, state) = setup_app().await;
    reject_writes(&state, "venues", "INSERT").await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request("/venues/create", &venue_fields("The Blue Room", &token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("An error occurred. Venue The Blue Room could not be listed."));
    assert!(!body.contains("successfully listed"));
    assert!(db::list_venues(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_venue_write_failure_keeps_stored_venue() {
    let (app, state) = setup_seeded_app().await;
    reject_writes(&state, "venues", "UPDATE").await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request("/venues/1/edit", &venue_fields("The Renamed Hop", &token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("An error occurred. Venue The Renamed Hop could not be updated."));

    let venue = db::get_venue(&state.db, 1).await.unwrap().unwrap();
    assert_eq!(venue.name, "The Musical Hop");
    assert_eq!(venue.city, "San Francisco");
}

#[tokio::test]
async fn test_delete_venue_write_failure_rolls_back() {
    let (app, state) = setup_seeded_app().await;
    reject_writes(&state, "venues", "DELETE").await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request("/venues/3/delete", &[("csrf_token", token.as_str())]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(
        "An error occurred. Venue Park Square Live Music &amp; Coffee could not be deleted."
    ));

    assert!(db::get_venue(&state.db, 3).await.unwrap().is_some());
    assert_eq!(db::list_shows(&state.db).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_artist_write_failure_flashes_error() {
    let (app, state) = setup_app().await;
    reject_writes(&state, "artists", "INSERT").await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request("/artists/create", &artist_fields("The Dust Devils", &token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("An error occurred. Artist The Dust Devils could not be listed."));
    assert!(db::list_artists(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_artist_write_failure_keeps_stored_artist() {
    let (app, state) = setup_seeded_app().await;
    reject_writes(&state, "artists", "UPDATE").await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request("/artists/2/edit", &artist_fields("Matt Q", &token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("An error occurred. Artist Matt Q could not be updated."));
    assert_eq!(
        db::get_artist(&state.db, 2).await.unwrap().unwrap().name,
        "Matt Quevedo"
    );
}

#[tokio::test]
async fn test_delete_artist_write_failure_rolls_back() {
    let (app, state) = setup_seeded_app().await;
    reject_writes(&state, "artists", "DELETE").await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request("/artists/3/delete", &[("csrf_token", token.as_str())]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("An error occurred. Artist The Wild Sax Band could not be deleted."));

    assert!(db::get_artist(&state.db, 3).await.unwrap().is_some());
    assert_eq!(db::list_shows(&state.db).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_show_write_failure_flashes_error() {
    let (app, state) = setup_seeded_app().await;
    reject_writes(&state, "shows", "INSERT").await;
    let token = token();

    let (status, body) = send(
        &app,
        form_request(
            "/shows/create",
            &[
                ("csrf_token", token.as_str()),
                ("artist_id", "1"),
                ("venue_id", "2"),
                ("start_time", "2036-01-01 20:00:00"),
            ],
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("An error occurred. Show could not be listed."));
    assert_eq!(db::list_shows(&state.db).await.unwrap().len(), 5);
}
