//! Artist database operations

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

use super::models::{Artist, ArtistFields};
use super::{decode_genres, encode_genres};
use crate::{Error, Result};

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, genres, image_link, facebook_link, \
                              website_link, seeking_venue, seeking_description";

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let genres: String = row.try_get("genres")?;

    Ok(Artist {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        phone: row.try_get("phone")?,
        genres: decode_genres(&genres)?,
        image_link: row.try_get("image_link")?,
        facebook_link: row.try_get("facebook_link")?,
        website_link: row.try_get("website_link")?,
        seeking_venue: row.try_get("seeking_venue")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}

pub(crate) async fn insert_artist(conn: &mut SqliteConnection, fields: &ArtistFields) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, genres, image_link, facebook_link,
            website_link, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(&fields.website_link)
    .bind(fields.seeking_venue)
    .bind(&fields.seeking_description)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Save a new artist, returning its id
pub async fn create_artist(pool: &SqlitePool, fields: &ArtistFields) -> Result<i64> {
    let mut tx = pool.begin().await?;
    let id = insert_artist(&mut tx, fields).await?;
    tx.commit().await?;

    Ok(id)
}

/// Load artist by id
pub async fn get_artist(pool: &SqlitePool, artist_id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query(&format!("SELECT {} FROM artists WHERE id = ?", ARTIST_COLUMNS))
        .bind(artist_id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(artist_from_row).transpose()
}

/// Load every artist in insertion order
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<Artist>> {
    let rows = sqlx::query(&format!("SELECT {} FROM artists ORDER BY id", ARTIST_COLUMNS))
        .fetch_all(pool)
        .await?;

    rows.iter().map(artist_from_row).collect()
}

pub async fn artist_exists(pool: &SqlitePool, artist_id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
        .bind(artist_id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

/// Replace every mutable field of an existing artist
pub async fn update_artist(pool: &SqlitePool, artist_id: i64, fields: &ArtistFields) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?, image_link = ?,
            facebook_link = ?, website_link = ?, seeking_venue = ?,
            seeking_description = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.phone)
    .bind(encode_genres(&fields.genres)?)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(&fields.website_link)
    .bind(fields.seeking_venue)
    .bind(&fields.seeking_description)
    .bind(artist_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", artist_id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete an artist; its shows go with it
pub async fn delete_artist(pool: &SqlitePool, artist_id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(artist_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", artist_id)));
    }

    tx.commit().await?;
    Ok(())
}
