//! Case-insensitive name search and area grouping
//!
//! Search is plain substring containment on lowercased names: no ranking,
//! no tokenization. An empty query matches every row.

use serde::Serialize;

use crate::db::models::{Artist, ShowListing, Venue};

/// Anything listed and searched by name
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Venue {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Artist {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Matches and their count, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    fn from_vec(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// True when `query` occurs in `name`, ignoring case
pub fn name_matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Keep the items whose name contains `query`
pub fn search_by_name<T, I>(items: I, query: &str) -> SearchResults<T>
where
    T: Named,
    I: IntoIterator<Item = T>,
{
    SearchResults::from_vec(
        items
            .into_iter()
            .filter(|item| name_matches(item.name(), query))
            .collect(),
    )
}

/// Keep the shows whose artist or venue name contains `query`
pub fn search_shows<I>(shows: I, query: &str) -> SearchResults<ShowListing>
where
    I: IntoIterator<Item = ShowListing>,
{
    SearchResults::from_vec(
        shows
            .into_iter()
            .filter(|show| {
                name_matches(&show.artist_name, query) || name_matches(&show.venue_name, query)
            })
            .collect(),
    )
}

/// Venues sharing one city and state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<Venue>,
}

/// Group venues by `(city, state)`, areas and venues in first-seen order
pub fn group_by_area<I>(venues: I) -> Vec<Area>
where
    I: IntoIterator<Item = Venue>,
{
    let mut areas: Vec<Area> = Vec::new();

    for venue in venues {
        match areas
            .iter_mut()
            .find(|area| area.city == venue.city && area.state == venue.state)
        {
            Some(area) => area.venues.push(venue),
            None => areas.push(Area {
                city: venue.city.clone(),
                state: venue.state.clone(),
                venues: vec![venue],
            }),
        }
    }

    areas
}
