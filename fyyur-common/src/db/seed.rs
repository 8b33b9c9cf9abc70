//! Sample data for a fresh database
//!
//! Three venues, three artists and five shows, inserted in one transaction.

use sqlx::SqlitePool;
use tracing::info;

use super::artists::insert_artist;
use super::models::{ArtistFields, NewShow, VenueFields};
use super::shows::insert_show;
use super::venues::insert_venue;
use crate::Result;

/// Counts of rows written by [`seed_sample_data`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub venues: usize,
    pub artists: usize,
    pub shows: usize,
}

/// (venue index, artist index, start time)
const SCHEDULE: [(usize, usize, &str); 5] = [
    (0, 0, "2019-05-21 21:30:00"),
    (2, 1, "2019-06-15 23:00:00"),
    (2, 2, "2035-04-01 20:00:00"),
    (2, 2, "2035-04-08 20:00:00"),
    (2, 2, "2035-04-15 20:00:00"),
];

fn genres(list: &[&str]) -> Vec<String> {
    list.iter().map(|g| g.to_string()).collect()
}

fn sample_venues() -> Vec<VenueFields> {
    let mut hop = VenueFields::new("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street");
    hop.phone = Some("123-123-1234".to_string());
    hop.genres = genres(&["Jazz", "Reggae", "Swing", "Classical", "Folk"]);
    hop.website_link = Some("https://www.themusicalhop.com".to_string());
    hop.facebook_link = Some("https://www.facebook.com/TheMusicalHop".to_string());
    hop.seeking_talent = true;
    hop.seeking_description =
        "We are on the lookout for a local artist to play every two weeks. Please call us."
            .to_string();
    hop.image_link = Some(
        "https://images.unsplash.com/photo-1543900694-133f37abaaa5?w=400".to_string(),
    );

    let mut pianos =
        VenueFields::new("The Dueling Pianos Bar", "New York", "NY", "335 Delancey Street");
    pianos.phone = Some("914-003-1132".to_string());
    pianos.genres = genres(&["Classical", "R&B", "Hip-Hop"]);
    pianos.website_link = Some("https://www.theduelingpianos.com".to_string());
    pianos.facebook_link = Some("https://www.facebook.com/theduelingpianos".to_string());
    pianos.image_link = Some(
        "https://images.unsplash.com/photo-1497032205916-ac775f0649ae?w=750".to_string(),
    );

    let mut park = VenueFields::new(
        "Park Square Live Music & Coffee",
        "San Francisco",
        "CA",
        "34 Whiskey Moore Ave",
    );
    park.phone = Some("415-000-1234".to_string());
    park.genres = genres(&["Rock n Roll", "Jazz", "Classical", "Folk"]);
    park.website_link = Some("https://www.parksquarelivemusicandcoffee.com".to_string());
    park.facebook_link =
        Some("https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string());
    park.image_link = Some(
        "https://images.unsplash.com/photo-1485686531765-ba63b07845a7?w=747".to_string(),
    );

    vec![hop, pianos, park]
}

fn sample_artists() -> Vec<ArtistFields> {
    let mut petals = ArtistFields::new("Guns N Petals", "San Francisco", "CA");
    petals.phone = Some("326-123-5000".to_string());
    petals.genres = genres(&["Rock n Roll"]);
    petals.website_link = Some("https://www.gunsnpetalsband.com".to_string());
    petals.facebook_link = Some("https://www.facebook.com/GunsNPetals".to_string());
    petals.seeking_venue = true;
    petals.seeking_description =
        "Looking for shows to perform at in the San Francisco Bay Area!".to_string();
    petals.image_link = Some(
        "https://images.unsplash.com/photo-1549213783-8284d0336c4f?w=300".to_string(),
    );

    let mut matt = ArtistFields::new("Matt Quevedo", "New York", "NY");
    matt.phone = Some("300-400-5000".to_string());
    matt.genres = genres(&["Jazz"]);
    matt.facebook_link = Some("https://www.facebook.com/mattquevedo923251523".to_string());
    matt.image_link = Some(
        "https://images.unsplash.com/photo-1495223153807-b916f75de8c5?w=334".to_string(),
    );

    let mut sax = ArtistFields::new("The Wild Sax Band", "San Francisco", "CA");
    sax.phone = Some("432-325-5432".to_string());
    sax.genres = genres(&["Jazz", "Classical"]);
    sax.image_link = Some(
        "https://images.unsplash.com/photo-1558369981-f9ca78462e61?w=794".to_string(),
    );

    vec![petals, matt, sax]
}

/// Insert the sample venues, artists and shows
///
/// Either everything is written or nothing is.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<SeedSummary> {
    let mut tx = pool.begin().await?;

    let mut venue_ids = Vec::new();
    for venue in sample_venues() {
        venue_ids.push(insert_venue(&mut tx, &venue).await?);
    }

    let mut artist_ids = Vec::new();
    for artist in sample_artists() {
        artist_ids.push(insert_artist(&mut tx, &artist).await?);
    }

    for (venue, artist, start_time) in SCHEDULE {
        insert_show(
            &mut tx,
            &NewShow {
                venue_id: venue_ids[venue],
                artist_id: artist_ids[artist],
                start_time: start_time.to_string(),
            },
        )
        .await?;
    }

    tx.commit().await?;

    let summary = SeedSummary {
        venues: venue_ids.len(),
        artists: artist_ids.len(),
        shows: SCHEDULE.len(),
    };
    info!(
        "Seeded {} venues, {} artists, {} shows",
        summary.venues, summary.artists, summary.shows
    );

    Ok(summary)
}
