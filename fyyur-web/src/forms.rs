//! Form parsing and validation
//!
//! Submissions arrive as ordered key/value pairs (`Form<Vec<(String, String)>>`)
//! because `genres` is a multi-select and repeats its key. Each form type keeps
//! the raw submitted strings so a failed submission can be re-rendered exactly
//! as the user typed it.

use fyyur_common::db::{
    Artist, ArtistFields, NewShow, Venue, VenueFields, DEFAULT_ARTIST_SEEKING_DESCRIPTION,
    DEFAULT_VENUE_SEEKING_DESCRIPTION,
};
use fyyur_common::time;

use crate::csrf;

pub const CSRF_FIELD: &str = "csrf_token";

const MAX_TEXT_LEN: usize = 120;
const MAX_LONG_TEXT_LEN: usize = 500;

pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Swing",
    "Other",
];

pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

/// Submitted form body
#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for FormData {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl FormData {
    /// First value submitted for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Trimmed first value, empty when absent
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(str::trim).unwrap_or_default().to_string()
    }

    /// Every non-blank value submitted for `key`, in order
    pub fn all(&self, key: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Checkbox state; unchecked boxes are simply not submitted
    pub fn checked(&self, key: &str) -> bool {
        matches!(
            self.get(key).map(|v| v.trim().to_ascii_lowercase()).as_deref(),
            Some("y" | "on" | "true" | "1")
        )
    }
}

/// Per-field validation messages, in the order they were found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    /// First message recorded for `field`
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Fold the CSRF check into a form's validation result
pub fn with_csrf<T>(
    secret_key: &str,
    data: &FormData,
    result: Result<T, FieldErrors>,
) -> Result<T, FieldErrors> {
    match (result, csrf::verify_token(secret_key, data.get(CSRF_FIELD))) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => {
            let mut errors = FieldErrors::default();
            errors.add(CSRF_FIELD, e.to_string());
            Err(errors)
        }
        (Err(errors), Ok(())) => Err(errors),
        (Err(mut errors), Err(e)) => {
            errors.add(CSRF_FIELD, e.to_string());
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            address: data.text("address"),
            phone: data.text("phone"),
            image_link: data.text("image_link"),
            facebook_link: data.text("facebook_link"),
            website_link: data.text("website_link"),
            genres: data.all("genres"),
            seeking_talent: data.checked("seeking_talent"),
            seeking_description: data.text("seeking_description"),
        }
    }

    pub fn validate(&self) -> Result<VenueFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        check_text(&mut errors, "name", &self.name, MAX_TEXT_LEN);
        check_text(&mut errors, "city", &self.city, MAX_TEXT_LEN);
        check_state(&mut errors, &self.state);
        check_text(&mut errors, "address", &self.address, MAX_TEXT_LEN);
        check_phone(&mut errors, &self.phone);
        check_genres(&mut errors, &self.genres);
        check_url(&mut errors, "image_link", &self.image_link);
        check_url(&mut errors, "facebook_link", &self.facebook_link);
        check_url(&mut errors, "website_link", &self.website_link);
        check_length(&mut errors, "seeking_description", &self.seeking_description, MAX_LONG_TEXT_LEN);

        errors.into_result(VenueFields {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: optional(&self.phone),
            image_link: optional(&self.image_link),
            facebook_link: optional(&self.facebook_link),
            website_link: optional(&self.website_link),
            genres: self.genres.clone(),
            seeking_talent: self.seeking_talent,
            seeking_description: describe(&self.seeking_description, DEFAULT_VENUE_SEEKING_DESCRIPTION),
        })
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            genres: venue.genres.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            name: data.text("name"),
            city: data.text("city"),
            state: data.text("state"),
            phone: data.text("phone"),
            image_link: data.text("image_link"),
            facebook_link: data.text("facebook_link"),
            website_link: data.text("website_link"),
            genres: data.all("genres"),
            seeking_venue: data.checked("seeking_venue"),
            seeking_description: data.text("seeking_description"),
        }
    }

    pub fn validate(&self) -> Result<ArtistFields, FieldErrors> {
        let mut errors = FieldErrors::default();

        check_text(&mut errors, "name", &self.name, MAX_TEXT_LEN);
        check_text(&mut errors, "city", &self.city, MAX_TEXT_LEN);
        check_state(&mut errors, &self.state);
        check_phone(&mut errors, &self.phone);
        check_genres(&mut errors, &self.genres);
        check_url(&mut errors, "image_link", &self.image_link);
        check_url(&mut errors, "facebook_link", &self.facebook_link);
        check_url(&mut errors, "website_link", &self.website_link);
        check_length(&mut errors, "seeking_description", &self.seeking_description, MAX_LONG_TEXT_LEN);

        errors.into_result(ArtistFields {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: optional(&self.phone),
            genres: self.genres.clone(),
            image_link: optional(&self.image_link),
            facebook_link: optional(&self.facebook_link),
            website_link: optional(&self.website_link),
            seeking_venue: self.seeking_venue,
            seeking_description: describe(&self.seeking_description, DEFAULT_ARTIST_SEEKING_DESCRIPTION),
        })
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            genres: artist.genres.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl Default for ShowForm {
    /// Blank ids, start time prefilled with the current time
    fn default() -> Self {
        Self {
            artist_id: String::new(),
            venue_id: String::new(),
            start_time: time::format_start_time(&time::now()),
        }
    }
}

impl ShowForm {
    pub fn from_data(data: &FormData) -> Self {
        Self {
            artist_id: data.text("artist_id"),
            venue_id: data.text("venue_id"),
            start_time: data.text("start_time"),
        }
    }

    /// Shape checks only; whether the ids exist is up to the caller
    pub fn validate(&self) -> Result<NewShow, FieldErrors> {
        let mut errors = FieldErrors::default();

        let artist_id = parse_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = parse_id(&mut errors, "venue_id", &self.venue_id);

        if self.start_time.is_empty() {
            errors.add("start_time", "This field is required.");
        } else if time::parse_start_time(&self.start_time).is_err() {
            errors.add("start_time", "Not a valid datetime value, expected YYYY-MM-DD HH:MM:SS.");
        }

        errors.into_result(NewShow {
            venue_id: venue_id.unwrap_or_default(),
            artist_id: artist_id.unwrap_or_default(),
            start_time: self.start_time.clone(),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn describe(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn check_text(errors: &mut FieldErrors, field: &'static str, value: &str, max_len: usize) {
    if value.is_empty() {
        errors.add(field, "This field is required.");
    } else {
        check_length(errors, field, value, max_len);
    }
}

fn check_length(errors: &mut FieldErrors, field: &'static str, value: &str, max_len: usize) {
    if value.chars().count() > max_len {
        errors.add(field, format!("Field cannot be longer than {} characters.", max_len));
    }
}

fn check_state(errors: &mut FieldErrors, value: &str) {
    if value.is_empty() {
        errors.add("state", "This field is required.");
    } else if !STATES.contains(&value) {
        errors.add("state", "Not a valid choice.");
    }
}

fn check_genres(errors: &mut FieldErrors, genres: &[String]) {
    if genres.is_empty() {
        errors.add("genres", "Select at least one genre.");
        return;
    }
    if let Some(unknown) = genres.iter().find(|g| !GENRES.contains(&g.as_str())) {
        errors.add("genres", format!("'{}' is not a valid choice for this field.", unknown));
    }
}

fn check_phone(errors: &mut FieldErrors, value: &str) {
    if value.is_empty() {
        return;
    }
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '-' | ' ' | '(' | ')' | '+' | '.'));
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !allowed || !(7..=15).contains(&digits) {
        errors.add("phone", "Invalid phone number.");
    }
}

fn check_url(errors: &mut FieldErrors, field: &'static str, value: &str) {
    if value.is_empty() {
        return;
    }
    let rest = value
        .strip_prefix("http://")
        .or_else(|| value.strip_prefix("https://"));
    match rest {
        Some(rest) if !rest.is_empty() && !rest.chars().any(char::is_whitespace) => {
            check_length(errors, field, value, MAX_LONG_TEXT_LEN)
        }
        _ => errors.add(field, "Invalid URL."),
    }
}

fn parse_id(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<i64> {
    if value.is_empty() {
        errors.add(field, "This field is required.");
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Not a valid integer value.");
            None
        }
    }
}
