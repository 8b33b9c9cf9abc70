//! Show database operations
//!
//! Shows are read back already joined with the counterpart side so the
//! view-model builder never touches the database.

use sqlx::{Row, SqliteConnection, SqlitePool};

use super::models::{NewShow, ShowListing};
use crate::view_model::ShowEntry;
use crate::{Error, Result};

pub(crate) async fn insert_show(conn: &mut SqliteConnection, show: &NewShow) -> Result<i64> {
    let result = sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(show.venue_id)
        .bind(show.artist_id)
        .bind(&show.start_time)
        .execute(&mut *conn)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Save a new show, returning its id
///
/// A venue or artist id that does not exist violates the foreign key and
/// fails with [`Error::Database`].
pub async fn create_show(pool: &SqlitePool, show: &NewShow) -> Result<i64> {
    let mut tx = pool.begin().await?;
    let id = insert_show(&mut tx, show).await?;
    tx.commit().await?;

    Ok(id)
}

/// Every show with its venue name and artist name/image, in insertion order
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query(
        r#"
        SELECT s.id, s.venue_id, v.name AS venue_name, s.artist_id,
               a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        JOIN artists a ON a.id = s.artist_id
        ORDER BY s.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| -> Result<ShowListing> {
            Ok(ShowListing {
                id: row.try_get("id")?,
                venue_id: row.try_get("venue_id")?,
                venue_name: row.try_get("venue_name")?,
                artist_id: row.try_get("artist_id")?,
                artist_name: row.try_get("artist_name")?,
                artist_image_link: row.try_get("artist_image_link")?,
                start_time: row.try_get("start_time")?,
            })
        })
        .collect()
}

/// Shows at a venue, keyed by the performing artist
pub async fn shows_for_venue(pool: &SqlitePool, venue_id: i64) -> Result<Vec<ShowEntry>> {
    let rows = sqlx::query(
        r#"
        SELECT a.id, a.name, a.image_link, s.start_time
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.id
        "#,
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(entry_from_row).collect()
}

/// Shows by an artist, keyed by the hosting venue
pub async fn shows_for_artist(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ShowEntry>> {
    let rows = sqlx::query(
        r#"
        SELECT v.id, v.name, v.image_link, s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.id
        "#,
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    rows.iter().map(entry_from_row).collect()
}

fn entry_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<ShowEntry> {
    Ok(ShowEntry {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        image_link: row.try_get("image_link")?,
        start_time: row.try_get("start_time")?,
    })
}

pub async fn delete_show(pool: &SqlitePool, show_id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM shows WHERE id = ?")
        .bind(show_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("show {}", show_id)));
    }

    tx.commit().await?;
    Ok(())
}
