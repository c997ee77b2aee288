//! Taste evolution: moving-average trends over watch date
//!
//! Entries are ordered oldest first and a window of
//! `max(2, floor(count / 5))` entries slides forward one entry at a time.
//! Each window position yields one [`TrendPoint`]. Fewer than two entries
//! produce no points; callers show a "need more data" state instead.
//!
//! Two metrics are supported:
//! - `Mean`: average rating of the chosen axis inside the window
//!   (the "snobbery" index when applied to head ratings)
//! - `PerfectShare`: percentage of window entries rated the perfect score
//!   (the "softening" index when applied to heart ratings)

use hnh_common::{MediaEntry, Rating};
use serde::Serialize;
use std::iter::FusedIterator;

/// Smallest window, also the minimum entry count for a trend
pub const MIN_WINDOW: usize = 2;

/// Which rating a trend follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingAxis {
    Head,
    Heart,
}

impl RatingAxis {
    pub fn of(&self, entry: &MediaEntry) -> Rating {
        match self {
            RatingAxis::Head => entry.head_rating,
            RatingAxis::Heart => entry.heart_rating,
        }
    }
}

/// How a window of ratings is reduced to one value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendMetric {
    /// Arithmetic mean of the window
    Mean,
    /// Percentage (0-100) of the window rated exactly `perfect`
    PerfectShare { perfect: Rating },
}

/// One smoothed sample: window start index and value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub index: usize,
    pub value: f64,
}

/// Window size for a given number of entries
pub fn window_size(count: usize) -> usize {
    MIN_WINDOW.max(count / 5)
}

/// Lazy sequence of trend points
///
/// Consumed once; build a new one with [`trend`] to iterate again.
#[derive(Debug)]
pub struct Trend<'a> {
    sorted: Vec<&'a MediaEntry>,
    window: usize,
    axis: RatingAxis,
    metric: TrendMetric,
    next: usize,
}

impl<'a> Trend<'a> {
    pub fn window(&self) -> usize {
        self.window
    }

    fn remaining(&self) -> usize {
        (self.sorted.len() + 1)
            .saturating_sub(self.window)
            .saturating_sub(self.next)
    }

    fn window_value(&self, window: &[&MediaEntry]) -> f64 {
        let size = window.len() as f64;
        match self.metric {
            TrendMetric::Mean => {
                let sum: f64 = window.iter().map(|e| f64::from(self.axis.of(e))).sum();
                sum / size
            }
            TrendMetric::PerfectShare { perfect } => {
                let hits = window.iter().filter(|e| self.axis.of(e) == perfect).count();
                hits as f64 / size * 100.0
            }
        }
    }
}

impl<'a> Iterator for Trend<'a> {
    type Item = TrendPoint;

    fn next(&mut self) -> Option<TrendPoint> {
        if self.remaining() == 0 {
            return None;
        }
        let index = self.next;
        let value = self.window_value(&self.sorted[index..index + self.window]);
        self.next += 1;
        Some(TrendPoint { index, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Trend<'_> {}

impl FusedIterator for Trend<'_> {}

/// Build a trend over `entries` (any order; sorted here by watch date)
///
/// The date sort is stable, so entries watched at the same instant keep
/// their input order.
pub fn trend(entries: &[MediaEntry], axis: RatingAxis, metric: TrendMetric) -> Trend<'_> {
    let mut sorted: Vec<&MediaEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date_watched);
    Trend {
        window: window_size(sorted.len()),
        sorted,
        axis,
        metric,
        next: 0,
    }
}

/// Mean head rating over time
pub fn snobbery_index(entries: &[MediaEntry]) -> Trend<'_> {
    trend(entries, RatingAxis::Head, TrendMetric::Mean)
}

/// Share of perfect heart ratings over time
pub fn softening_index(entries: &[MediaEntry], perfect: Rating) -> Trend<'_> {
    trend(entries, RatingAxis::Heart, TrendMetric::PerfectShare { perfect })
}
