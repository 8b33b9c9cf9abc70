//! Database models

use serde::{Deserialize, Serialize};

/// Default `seeking_description` for venues that leave it blank
pub const DEFAULT_VENUE_SEEKING_DESCRIPTION: &str = "Not seeking artist right now";

/// Default `seeking_description` for artists that leave it blank
pub const DEFAULT_ARTIST_SEEKING_DESCRIPTION: &str = "Not seeking venues right now";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

/// Mutable venue fields, used for both insert and full-replace update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueFields {
    /// Minimal venue with defaults for every optional field
    pub fn new(name: &str, city: &str, state: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: address.to_string(),
            phone: None,
            image_link: None,
            facebook_link: None,
            website_link: None,
            genres: Vec::new(),
            seeking_talent: false,
            seeking_description: DEFAULT_VENUE_SEEKING_DESCRIPTION.to_string(),
        }
    }
}

impl From<&Venue> for VenueFields {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website_link.clone(),
            genres: venue.genres.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

/// Mutable artist fields, used for both insert and full-replace update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistFields {
    /// Minimal artist with defaults for every optional field
    pub fn new(name: &str, city: &str, state: &str) -> Self {
        Self {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            phone: None,
            genres: Vec::new(),
            image_link: None,
            facebook_link: None,
            website_link: None,
            seeking_venue: false,
            seeking_description: DEFAULT_ARTIST_SEEKING_DESCRIPTION.to_string(),
        }
    }
}

impl From<&Artist> for ArtistFields {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    /// `YYYY-MM-DD HH:MM:SS`, see [`crate::time::START_TIME_FORMAT`]
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: String,
}

/// A show joined with both of its sides, for the shows listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowListing {
    pub id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}
