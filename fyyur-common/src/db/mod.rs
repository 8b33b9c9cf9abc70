//! Persistence store: SQLite tables for venues, artists and shows
//!
//! Every write runs in its own transaction. A failed statement drops the
//! transaction, which rolls it back, so no write is ever partially applied.

pub mod artists;
pub mod init;
pub mod models;
pub mod seed;
pub mod shows;
pub mod venues;

pub use artists::*;
pub use init::*;
pub use models::*;
pub use seed::{seed_sample_data, SeedSummary};
pub use shows::*;
pub use venues::*;

use crate::Result;

fn encode_genres(genres: &[String]) -> Result<String> {
    Ok(serde_json::to_string(genres)?)
}

fn decode_genres(raw: &str) -> Result<Vec<String>> {
    Ok(serde_json::from_str(raw)?)
}
