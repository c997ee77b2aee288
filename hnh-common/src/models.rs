//! Media entry model shared by the entry store boundary and the analytics engine
//!
//! Field names serialize in the camelCase form used by the entry store export
//! (`headRating`, `heartRating`, `dateWatched`, `type`).

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Rating value on the head or heart axis
///
/// Nominally 1..=5. Values outside the configured [`RatingScale`] are rejected
/// by [`MediaEntry::validate`] but never cause a panic downstream.
pub type Rating = u8;

/// Opaque entry identifier assigned by the entry store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generate a fresh identifier (UUID v4)
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of media an entry rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Book,
    TvShow,
    VideoGame,
    BoardGame,
}

impl MediaType {
    /// Canonical lowercase key (`movie`, `tvshow`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Book => "book",
            MediaType::TvShow => "tvshow",
            MediaType::VideoGame => "videogame",
            MediaType::BoardGame => "boardgame",
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MediaType::Movie => "Movie",
            MediaType::Book => "Book",
            MediaType::TvShow => "TV Show",
            MediaType::VideoGame => "Video Game",
            MediaType::BoardGame => "Board Game",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MediaType::Movie => "🎬",
            MediaType::Book => "📚",
            MediaType::TvShow => "📺",
            MediaType::VideoGame => "🎮",
            MediaType::BoardGame => "🎲",
        }
    }

    /// Get all media type variants
    ///
    /// Useful for filters and validation
    pub fn all_variants() -> &'static [MediaType] {
        &[
            MediaType::Movie,
            MediaType::Book,
            MediaType::TvShow,
            MediaType::VideoGame,
            MediaType::BoardGame,
        ]
    }
}

impl FromStr for MediaType {
    type Err = Error;

    /// Parse from the lowercase key; also accepts display names
    /// ("TV Show", "video game") case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        MediaType::all_variants()
            .iter()
            .copied()
            .find(|t| t.key() == normalized)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown media type: {}", s)))
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Inclusive range of accepted rating values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingScale {
    #[serde(default = "default_min")]
    pub min: Rating,
    #[serde(default = "default_max")]
    pub max: Rating,
}

fn default_min() -> Rating {
    1
}

fn default_max() -> Rating {
    5
}

impl RatingScale {
    pub fn contains(&self, rating: Rating) -> bool {
        (self.min..=self.max).contains(&rating)
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self {
            min: default_min(),
            max: default_max(),
        }
    }
}

/// A single rated media item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntry {
    #[serde(alias = "_id")]
    pub id: EntryId,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    /// Intellectual / craft score
    pub head_rating: Rating,
    /// Emotional / enjoyment score
    pub heart_rating: Rating,
    /// Epoch milliseconds
    pub date_watched: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MediaEntry {
    /// Create an entry with a freshly generated id and no notes
    pub fn new(
        title: impl Into<String>,
        media_type: MediaType,
        head_rating: Rating,
        heart_rating: Rating,
        date_watched: i64,
    ) -> Self {
        Self {
            id: EntryId::new(),
            title: title.into(),
            media_type,
            head_rating,
            heart_rating,
            date_watched,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check the invariants the entry store enforces before entries reach
    /// the analytics engine.
    pub fn validate(&self, scale: &RatingScale) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::InvalidInput(format!(
                "Entry {} has an empty title",
                self.id
            )));
        }
        if !scale.contains(self.head_rating) {
            return Err(Error::InvalidInput(format!(
                "Head rating must be between {} and {} (got {} for '{}')",
                scale.min, scale.max, self.head_rating, self.title
            )));
        }
        if !scale.contains(self.heart_rating) {
            return Err(Error::InvalidInput(format!(
                "Heart rating must be between {} and {} (got {} for '{}')",
                scale.min, scale.max, self.heart_rating, self.title
            )));
        }
        Ok(())
    }

    /// Watch date as a UTC timestamp, if representable
    pub fn watched_at(&self) -> Option<DateTime<Utc>> {
        crate::time::millis_to_datetime(self.date_watched)
    }
}
