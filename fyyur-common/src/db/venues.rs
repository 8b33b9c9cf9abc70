//! Venue database operations

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};

use super::models::{Venue, VenueFields};
use super::{decode_genres, encode_genres};
use crate::{Error, Result};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
                             website_link, genres, seeking_talent, seeking_description";

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    let genres: String = row.try_get("genres")?;

    Ok(Venue {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        city: row.try_get("city")?,
        state: row.try_get("state")?,
        address: row.try_get("address")?,
        phone: row.try_get("phone")?,
        image_link: row.try_get("image_link")?,
        facebook_link: row.try_get("facebook_link")?,
        website_link: row.try_get("website_link")?,
        genres: decode_genres(&genres)?,
        seeking_talent: row.try_get("seeking_talent")?,
        seeking_description: row.try_get("seeking_description")?,
    })
}

/// Insert a venue on an open connection or transaction
pub(crate) async fn insert_venue(conn: &mut SqliteConnection, fields: &VenueFields) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, image_link, facebook_link,
            website_link, genres, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(&fields.website_link)
    .bind(encode_genres(&fields.genres)?)
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Save a new venue, returning its id
pub async fn create_venue(pool: &SqlitePool, fields: &VenueFields) -> Result<i64> {
    let mut tx = pool.begin().await?;
    let id = insert_venue(&mut tx, fields).await?;
    tx.commit().await?;

    Ok(id)
}

/// Load venue by id
pub async fn get_venue(pool: &SqlitePool, venue_id: i64) -> Result<Option<Venue>> {
    let row = sqlx::query(&format!("SELECT {} FROM venues WHERE id = ?", VENUE_COLUMNS))
        .bind(venue_id)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(venue_from_row).transpose()
}

/// Load every venue in insertion order
pub async fn list_venues(pool: &SqlitePool) -> Result<Vec<Venue>> {
    let rows = sqlx::query(&format!("SELECT {} FROM venues ORDER BY id", VENUE_COLUMNS))
        .fetch_all(pool)
        .await?;

    rows.iter().map(venue_from_row).collect()
}

pub async fn venue_exists(pool: &SqlitePool, venue_id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
        .bind(venue_id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

/// Replace every mutable field of an existing venue
pub async fn update_venue(pool: &SqlitePool, venue_id: i64, fields: &VenueFields) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, image_link = ?,
            facebook_link = ?, website_link = ?, genres = ?, seeking_talent = ?,
            seeking_description = ?, updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&fields.name)
    .bind(&fields.city)
    .bind(&fields.state)
    .bind(&fields.address)
    .bind(&fields.phone)
    .bind(&fields.image_link)
    .bind(&fields.facebook_link)
    .bind(&fields.website_link)
    .bind(encode_genres(&fields.genres)?)
    .bind(fields.seeking_talent)
    .bind(&fields.seeking_description)
    .bind(venue_id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", venue_id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete a venue; its shows go with it
pub async fn delete_venue(pool: &SqlitePool, venue_id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(venue_id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", venue_id)));
    }

    tx.commit().await?;
    Ok(())
}
