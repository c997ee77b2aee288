//! Entry list browsing: type filter and sort orders

use hnh_common::{Error, MediaEntry, MediaType, Result};
use std::cmp::Ordering;
use std::str::FromStr;

/// Default head weight for rating sort (equal head and heart)
pub const DEFAULT_HEAD_WEIGHT: u8 = 50;

/// List order for entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    DateNewest,
    DateOldest,
    AlphaAz,
    AlphaZa,
    /// Weighted score descending; `head_weight` is a percentage (0-100)
    Rating { head_weight: u8 },
}

impl Default for SortOption {
    fn default() -> Self {
        SortOption::DateNewest
    }
}

impl FromStr for SortOption {
    type Err = Error;

    /// Parse `newest`, `oldest`, `az`, `za` or `rating`
    ///
    /// `rating` uses [`DEFAULT_HEAD_WEIGHT`]; `rating:70` sets the weight.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        let (name, weight) = match lower.split_once(':') {
            Some((name, weight)) => (name, Some(weight)),
            None => (lower.as_str(), None),
        };

        match (name, weight) {
            ("newest", None) => Ok(SortOption::DateNewest),
            ("oldest", None) => Ok(SortOption::DateOldest),
            ("az", None) => Ok(SortOption::AlphaAz),
            ("za", None) => Ok(SortOption::AlphaZa),
            ("rating", None) => Ok(SortOption::Rating {
                head_weight: DEFAULT_HEAD_WEIGHT,
            }),
            ("rating", Some(weight)) => {
                let head_weight: u8 = weight
                    .parse()
                    .ok()
                    .filter(|w| *w <= 100)
                    .ok_or_else(|| {
                        Error::InvalidInput(format!("Head weight must be 0-100, got '{}'", weight))
                    })?;
                Ok(SortOption::Rating { head_weight })
            }
            _ => Err(Error::InvalidInput(format!("Unknown sort option: {}", s))),
        }
    }
}

impl SortOption {
    /// Parse a sort argument, giving a bare `rating` the configured weight
    pub fn from_arg(arg: &str, head_weight: u8) -> Result<Self> {
        match arg.parse::<SortOption>()? {
            SortOption::Rating { .. } if arg.eq_ignore_ascii_case("rating") => {
                Ok(SortOption::Rating { head_weight })
            }
            option => Ok(option),
        }
    }
}

/// Keep entries of one type; `None` keeps everything
pub fn filter_by_type(entries: &[MediaEntry], media_type: Option<MediaType>) -> Vec<MediaEntry> {
    entries
        .iter()
        .filter(|e| media_type.map_or(true, |t| e.media_type == t))
        .cloned()
        .collect()
}

/// Blend of head and heart, weighted by `head_weight` percent
pub fn weighted_score(entry: &MediaEntry, head_weight: u8) -> f64 {
    let head_w = f64::from(head_weight.min(100)) / 100.0;
    let heart_w = 1.0 - head_w;
    f64::from(entry.head_rating) * head_w + f64::from(entry.heart_rating) * heart_w
}

/// Sort entries in place (stable)
pub fn sort_entries(entries: &mut [MediaEntry], option: SortOption) {
    match option {
        SortOption::DateNewest => entries.sort_by(|a, b| b.date_watched.cmp(&a.date_watched)),
        SortOption::DateOldest => entries.sort_by(|a, b| a.date_watched.cmp(&b.date_watched)),
        SortOption::AlphaAz => entries.sort_by(compare_titles),
        SortOption::AlphaZa => entries.sort_by(|a, b| compare_titles(b, a)),
        SortOption::Rating { head_weight } => entries.sort_by(|a, b| {
            weighted_score(b, head_weight).total_cmp(&weighted_score(a, head_weight))
        }),
    }
}

fn compare_titles(a: &MediaEntry, b: &MediaEntry) -> Ordering {
    a.title
        .to_lowercase()
        .cmp(&b.title.to_lowercase())
        .then_with(|| a.title.cmp(&b.title))
}
