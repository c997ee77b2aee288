//! Media-type battle: per-type averages and the critic insight

use hnh_common::{MediaEntry, MediaType};
use serde::Serialize;

/// Insight shown before anything has been rated
pub const EMPTY_INSIGHT: &str = "Not enough data yet.";

/// Mean ratings for one media type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAverage {
    pub media_type: MediaType,
    /// Number of entries of this type
    pub count: usize,
    /// Mean head rating, one decimal
    pub avg_head: f64,
    /// Mean heart rating, one decimal
    pub avg_heart: f64,
}

/// Average ratings per media type, one row per type present
///
/// Rows follow the order in which each type first appears in `entries`.
pub fn media_averages(entries: &[MediaEntry]) -> Vec<MediaAverage> {
    let mut types: Vec<MediaType> = Vec::new();
    for entry in entries {
        if !types.contains(&entry.media_type) {
            types.push(entry.media_type);
        }
    }

    types
        .into_iter()
        .map(|media_type| {
            let (count, head_sum, heart_sum) = entries
                .iter()
                .filter(|e| e.media_type == media_type)
                .fold((0usize, 0u64, 0u64), |(n, head, heart), e| {
                    (
                        n + 1,
                        head + u64::from(e.head_rating),
                        heart + u64::from(e.heart_rating),
                    )
                });
            // count >= 1: the type was taken from the entries themselves
            MediaAverage {
                media_type,
                count,
                avg_head: round_one_decimal(head_sum as f64 / count as f64),
                avg_heart: round_one_decimal(heart_sum as f64 / count as f64),
            }
        })
        .collect()
}

/// Name the types with the highest and lowest mean head rating
///
/// Ranking uses the head axis only. Ties keep first-appearance order.
pub fn media_insight(averages: &[MediaAverage]) -> String {
    let mut ranked: Vec<&MediaAverage> = averages.iter().collect();
    ranked.sort_by(|a, b| b.avg_head.total_cmp(&a.avg_head));

    match (ranked.first(), ranked.last()) {
        (Some(most), Some(least)) => format!(
            "You tend to be most critical of {}s and most forgiving of {}s.",
            most.media_type.key(),
            least.media_type.key()
        ),
        _ => EMPTY_INSIGHT.to_string(),
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
