//! Head/heart divergence: where respect and enjoyment disagree
//!
//! The three category filters are independent passes over the full list.
//! Sorts are stable so equal ratings keep their input order.

use hnh_common::{MediaEntry, Rating};
use serde::Serialize;

const STRONG_FROM: Rating = 4;
const WEAK_UP_TO: Rating = 2;

/// Entries whose ratings differ by less than this are "in harmony"
const HARMONY_TOLERANCE: f64 = 0.5;

/// Respected but not enjoyed (head >= 4, heart <= 2), by head descending
pub fn cold_masterpieces(entries: &[MediaEntry]) -> Vec<MediaEntry> {
    let mut found: Vec<MediaEntry> = entries
        .iter()
        .filter(|e| e.head_rating >= STRONG_FROM && e.heart_rating <= WEAK_UP_TO)
        .cloned()
        .collect();
    found.sort_by(|a, b| b.head_rating.cmp(&a.head_rating));
    found
}

/// Enjoyed but not respected (head <= 2, heart >= 4), by heart descending
pub fn shameless_loves(entries: &[MediaEntry]) -> Vec<MediaEntry> {
    let mut found: Vec<MediaEntry> = entries
        .iter()
        .filter(|e| e.head_rating <= WEAK_UP_TO && e.heart_rating >= STRONG_FROM)
        .cloned()
        .collect();
    found.sort_by(|a, b| b.heart_rating.cmp(&a.heart_rating));
    found
}

/// Head and heart agree, by head descending
pub fn perfect_harmony(entries: &[MediaEntry]) -> Vec<MediaEntry> {
    let mut found: Vec<MediaEntry> = entries
        .iter()
        .filter(|e| gap(e) < HARMONY_TOLERANCE)
        .cloned()
        .collect();
    found.sort_by(|a, b| b.head_rating.cmp(&a.head_rating));
    found
}

fn gap(entry: &MediaEntry) -> f64 {
    (f64::from(entry.head_rating) - f64::from(entry.heart_rating)).abs()
}

/// Leading slice of a category plus how many entries were left out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview<'a> {
    pub shown: &'a [MediaEntry],
    pub more: usize,
}

/// First `limit` entries of an already sorted list
pub fn preview(entries: &[MediaEntry], limit: usize) -> Preview<'_> {
    let shown = &entries[..entries.len().min(limit)];
    Preview {
        shown,
        more: entries.len() - shown.len(),
    }
}

/// Distance from the head = heart diagonal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeltaSummary {
    /// Mean |head - heart| (0 for empty input)
    pub delta: f64,
    /// Entries with head > heart (respect over enjoyment)
    pub above_line: usize,
    /// Entries with heart > head (enjoyment over respect)
    pub below_line: usize,
}

impl DeltaSummary {
    pub fn from_entries(entries: &[MediaEntry]) -> Self {
        if entries.is_empty() {
            return Self::default();
        }

        let mut sum = 0.0;
        let mut above_line = 0;
        let mut below_line = 0;
        for entry in entries {
            sum += gap(entry);
            if entry.head_rating > entry.heart_rating {
                above_line += 1;
            }
            if entry.heart_rating > entry.head_rating {
                below_line += 1;
            }
        }

        Self {
            delta: sum / entries.len() as f64,
            above_line,
            below_line,
        }
    }
}

/// One-line reading of a delta score
pub fn delta_verdict(delta: f64) -> &'static str {
    if delta < 0.7 {
        "You are a very consistent rater."
    } else if delta > 1.5 {
        "Your head and heart are seemingly at war."
    } else {
        "You have a balanced perspective."
    }
}
