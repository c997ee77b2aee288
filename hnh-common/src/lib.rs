//! # HeadandHeart Common Library
//!
//! Shared code for the HeadandHeart tools including:
//! - Media entry model (MediaEntry, MediaType, RatingScale)
//! - Entry validation
//! - Configuration loading
//! - Timestamp helpers

pub mod config;
pub mod error;
pub mod models;
pub mod time;

pub use error::{Error, Result};
pub use models::{EntryId, MediaEntry, MediaType, Rating, RatingScale};
