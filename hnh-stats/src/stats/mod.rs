//! Taste analytics: rated entries in, dashboard report out
//!
//! [`compute_stats`] is a pure function of the entry list. It performs no I/O,
//! keeps no state between calls, and is total: empty input yields the fixed
//! [`StatsReport::empty`] report and out-of-range ratings are classified by
//! the same comparisons as in-range ones.

pub mod divergence;
pub mod media;
pub mod rules;
pub mod zones;

pub use divergence::{delta_verdict, preview, DeltaSummary, Preview};
pub use media::{media_averages, media_insight, MediaAverage, EMPTY_INSIGHT};
pub use rules::{classify_archetype, recommend, Archetype, SweetSpot};
pub use zones::{hot_zone, void_zone, HotZone, Quadrant, RatingCell, TasteGrid, VoidZone};

use hnh_common::MediaEntry;
use serde::Serialize;
use tracing::debug;

/// Everything the dashboard shows, derived from one entry list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// Number of entries the report was computed from
    pub entry_count: usize,

    // Taste galaxy
    pub hot_zone: Option<HotZone>,
    pub void_zone: VoidZone,
    pub taste_grid: TasteGrid,

    // Divergence
    pub cold_masterpieces: Vec<MediaEntry>,
    pub shameless_loves: Vec<MediaEntry>,
    pub perfect_harmony: Vec<MediaEntry>,

    pub archetype: Archetype,

    // Media-type battle
    pub media_averages: Vec<MediaAverage>,
    pub media_insight: String,

    pub sweet_spot: SweetSpot,

    // Delta
    pub delta: f64,
    pub above_line: usize,
    pub below_line: usize,
}

impl StatsReport {
    /// The idle-state report for an empty entry list
    pub fn empty() -> Self {
        Self {
            entry_count: 0,
            hot_zone: None,
            void_zone: VoidZone::all(),
            taste_grid: TasteGrid::default(),
            cold_masterpieces: Vec::new(),
            shameless_loves: Vec::new(),
            perfect_harmony: Vec::new(),
            archetype: rules::BLANK_SLATE,
            media_averages: Vec::new(),
            media_insight: EMPTY_INSIGHT.to_string(),
            sweet_spot: SweetSpot::unknown(),
            delta: 0.0,
            above_line: 0,
            below_line: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// `Head h / Heart t`, or `N/A` when nothing has been rated
    pub fn hot_zone_label(&self) -> String {
        self.hot_zone
            .map(|zone| zone.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn void_zone_label(&self) -> String {
        self.void_zone.label()
    }

    pub fn delta_verdict(&self) -> &'static str {
        delta_verdict(self.delta)
    }

    /// Leading perfect-harmony entries plus the remainder count
    pub fn harmony_preview(&self, limit: usize) -> Preview<'_> {
        preview(&self.perfect_harmony, limit)
    }
}

impl Default for StatsReport {
    fn default() -> Self {
        Self::empty()
    }
}

/// Compute the full taste report for a user's entries
///
/// Input order matters only for tie-breaks (hot zone, stable sorts, type
/// order); the same list always yields the same report.
pub fn compute_stats(entries: &[MediaEntry]) -> StatsReport {
    if entries.is_empty() {
        debug!("No entries, returning empty stats report");
        return StatsReport::empty();
    }

    let (mean_head, mean_heart) = mean_ratings(entries);
    let media_averages = media_averages(entries);
    let media_insight = media_insight(&media_averages);
    let delta = DeltaSummary::from_entries(entries);
    let archetype = *classify_archetype(mean_head, mean_heart);

    let report = StatsReport {
        entry_count: entries.len(),
        hot_zone: hot_zone(entries),
        void_zone: void_zone(entries),
        taste_grid: TasteGrid::from_entries(entries),
        cold_masterpieces: divergence::cold_masterpieces(entries),
        shameless_loves: divergence::shameless_loves(entries),
        perfect_harmony: divergence::perfect_harmony(entries),
        archetype,
        media_averages,
        media_insight,
        sweet_spot: SweetSpot::from_means(mean_head, mean_heart),
        delta: delta.delta,
        above_line: delta.above_line,
        below_line: delta.below_line,
    };

    debug!(
        entries = report.entry_count,
        mean_head,
        mean_heart,
        archetype = report.archetype.name,
        "Computed stats report"
    );

    report
}

/// Mean (head, heart) over a non-empty list
fn mean_ratings(entries: &[MediaEntry]) -> (f64, f64) {
    let n = entries.len() as f64;
    let head: f64 = entries.iter().map(|e| f64::from(e.head_rating)).sum();
    let heart: f64 = entries.iter().map(|e| f64::from(e.heart_rating)).sum();
    (head / n, heart / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hnh_common::{MediaType, Rating};

    fn rated(head: Rating, heart: Rating) -> MediaEntry {
        MediaEntry::new("t", MediaType::Movie, head, heart, 0)
    }

    #[test]
    fn test_empty_report_fields() {
        let report = compute_stats(&[]);
        assert_eq!(report, StatsReport::empty());
        assert!(report.is_empty());
        assert_eq!(report.hot_zone_label(), "N/A");
        assert_eq!(report.archetype.name, "The Blank Slate");
        assert_eq!(report.media_insight, "Not enough data yet.");
        assert_eq!(report.sweet_spot.label, "Unknown");
    }

    #[test]
    fn test_mean_ratings() {
        let (head, heart) = mean_ratings(&[rated(5, 1), rated(4, 2)]);
        assert_eq!(head, 4.5);
        assert_eq!(heart, 1.5);
    }

    #[test]
    fn test_academic_profile() {
        let report = compute_stats(&[rated(5, 1), rated(4, 2), rated(4, 3)]);
        assert_eq!(report.archetype.name, "The Academic");
        assert_eq!(report.sweet_spot.label, "Head 4 / Heart 2");
        assert!(report
            .sweet_spot
            .description
            .ends_with("You prefer intellectual stimulation. Look for documentaries or complex dramas."));
    }

    #[test]
    fn test_out_of_range_ratings_do_not_panic() {
        let report = compute_stats(&[rated(0, 9), rated(200, 0)]);
        assert_eq!(report.entry_count, 2);
        assert_eq!(report.taste_grid.total(), 0);
        assert_eq!(report.cold_masterpieces.len(), 1);
        assert_eq!(report.shameless_loves.len(), 1);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = compute_stats(&[rated(3, 3)]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["entryCount"], 1);
        assert_eq!(json["aboveLine"], 0);
        assert_eq!(json["hotZone"]["cell"]["head"], 3);
        assert_eq!(json["archetype"]["name"], "Chaotic Neutral");
        assert!(json["voidZone"]["void"].is_array());
    }
}
