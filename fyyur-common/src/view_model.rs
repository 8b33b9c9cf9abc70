//! Show partitioning and detail-page view-models
//!
//! A venue page lists the artists it hosts and an artist page lists the venues
//! it plays; both split their shows into past and upcoming relative to the
//! request time. One function does the split for either side: the caller
//! hands over [`ShowEntry`] records already keyed by the counterpart.
//!
//! # Classification
//!
//! A show whose start time is strictly before `now` is past. A show starting
//! exactly at `now` or later is upcoming.

use chrono::NaiveDateTime;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::db::models::{Artist, Venue};
use crate::time::parse_start_time;
use crate::Result;

/// One show as seen from one side of the venue/artist relationship
///
/// `id`, `name` and `image_link` describe the counterpart: the artist when
/// listing a venue's shows, the venue when listing an artist's shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowEntry {
    pub id: i64,
    pub name: String,
    pub image_link: Option<String>,
    /// Raw start time, preserved exactly as stored
    pub start_time: String,
}

/// Shows split into past and upcoming, each in input order
///
/// Serializes with `past_shows_count` and `upcoming_shows_count` alongside
/// the two sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowPartition {
    pub past_shows: Vec<ShowEntry>,
    pub upcoming_shows: Vec<ShowEntry>,
}

impl ShowPartition {
    pub fn past_shows_count(&self) -> usize {
        self.past_shows.len()
    }

    pub fn upcoming_shows_count(&self) -> usize {
        self.upcoming_shows.len()
    }
}

impl Serialize for ShowPartition {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ShowPartition", 4)?;
        state.serialize_field("past_shows", &self.past_shows)?;
        state.serialize_field("upcoming_shows", &self.upcoming_shows)?;
        state.serialize_field("past_shows_count", &self.past_shows_count())?;
        state.serialize_field("upcoming_shows_count", &self.upcoming_shows_count())?;
        state.end()
    }
}

/// Split shows into past (strictly before `now`) and upcoming (at or after `now`)
///
/// Order within each sequence follows the input. A single unparseable start
/// time fails the whole call with [`crate::Error::MalformedTimestamp`]; no
/// partial partition is returned.
pub fn partition_shows<I>(shows: I, now: NaiveDateTime) -> Result<ShowPartition>
where
    I: IntoIterator<Item = ShowEntry>,
{
    let mut partition = ShowPartition::default();

    for show in shows {
        if parse_start_time(&show.start_time)? < now {
            partition.past_shows.push(show);
        } else {
            partition.upcoming_shows.push(show);
        }
    }

    Ok(partition)
}

/// Venue detail page: the stored venue plus its artists' shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueDetail {
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: ShowPartition,
}

impl VenueDetail {
    pub fn build<I>(venue: Venue, shows: I, now: NaiveDateTime) -> Result<Self>
    where
        I: IntoIterator<Item = ShowEntry>,
    {
        Ok(Self {
            venue,
            shows: partition_shows(shows, now)?,
        })
    }
}

/// Artist detail page: the stored artist plus the venues it plays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowPartition,
}

impl ArtistDetail {
    pub fn build<I>(artist: Artist, shows: I, now: NaiveDateTime) -> Result<Self>
    where
        I: IntoIterator<Item = ShowEntry>,
    {
        Ok(Self {
            artist,
            shows: partition_shows(shows, now)?,
        })
    }
}
