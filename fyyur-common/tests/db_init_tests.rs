//! Integration tests for database initialization against real files
//!
//! Covers:
//! - Database file created on first run
//! - Reopening an existing database keeps its rows
//! - Foreign keys hold on every pooled connection

use fyyur_common::db::{
    create_artist, create_show, create_venue, delete_venue, init_database, list_shows,
    ArtistFields, NewShow, VenueFields,
};

fn database_url(dir: &tempfile::TempDir) -> String {
    format!("sqlite://{}", dir.path().join("fyyur.db").display())
}

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("fyyur.db");
    assert!(!db_path.exists());

    let result = init_database(&database_url(&dir)).await;

    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_reopens_with_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let url = database_url(&dir);

    let pool = init_database(&url).await.unwrap();
    create_venue(
        &pool,
        &VenueFields::new("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street"),
    )
    .await
    .unwrap();
    pool.close().await;

    let reopened = init_database(&url).await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
        .fetch_one(&reopened)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_cascade_delete_on_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let pool = init_database(&database_url(&dir)).await.unwrap();

    let venue = create_venue(
        &pool,
        &VenueFields::new("Park Square Live Music & Coffee", "San Francisco", "CA", "34 Whiskey Moore Ave"),
    )
    .await
    .unwrap();
    let artist = create_artist(&pool, &ArtistFields::new("The Wild Sax Band", "San Francisco", "CA"))
        .await
        .unwrap();

    // Several writes so more than one pooled connection is likely exercised
    for day in 1..=5 {
        create_show(
            &pool,
            &NewShow {
                venue_id: venue,
                artist_id: artist,
                start_time: format!("2035-04-0{} 20:00:00", day),
            },
        )
        .await
        .unwrap();
    }
    assert_eq!(list_shows(&pool).await.unwrap().len(), 5);

    delete_venue(&pool, venue).await.unwrap();
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
