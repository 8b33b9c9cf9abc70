//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking directory:
//! - Database models and the SQLite persistence store
//! - Show partitioning into past/upcoming view-models
//! - Case-insensitive name search
//! - Configuration loading
//! - Timestamp format utilities

pub mod config;
pub mod db;
pub mod error;
pub mod search;
pub mod time;
pub mod view_model;

pub use error::{Error, Result};
pub use view_model::{partition_shows, ShowEntry, ShowPartition};
