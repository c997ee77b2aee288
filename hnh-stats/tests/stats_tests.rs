//! Integration tests for the taste report
//!
//! Exercises compute_stats through the public API: empty-state report,
//! counting identities, category filters, archetypes, tie-breaks and trends.

use hnh_common::{MediaEntry, MediaType, Rating};
use hnh_stats::stats::{Quadrant, RatingCell, VoidZone};
use hnh_stats::trend::{snobbery_index, softening_index, window_size};
use hnh_stats::{compute_stats, StatsCache, StatsReport};

const DAY_MS: i64 = 86_400_000;

fn rated(title: &str, head: Rating, heart: Rating) -> MediaEntry {
    MediaEntry::new(title, MediaType::Movie, head, heart, 0)
}

/// Every (head, heart) pair on the 1-5 grid, cycling through media types
fn full_grid() -> Vec<MediaEntry> {
    let types = MediaType::all_variants();
    let mut entries = Vec::new();
    for head in 1..=5 {
        for heart in 1..=5 {
            let i = entries.len();
            entries.push(MediaEntry::new(
                format!("{}-{}", head, heart),
                types[i % types.len()],
                head,
                heart,
                i as i64 * DAY_MS,
            ));
        }
    }
    entries
}

#[test]
fn test_empty_input_is_fixed_empty_report() {
    let report = compute_stats(&[]);

    assert_eq!(report, StatsReport::empty());
    assert_eq!(report.hot_zone_label(), "N/A");
    assert_eq!(report.void_zone, VoidZone::Void(Quadrant::ALL.to_vec()));
    assert!(report.cold_masterpieces.is_empty());
    assert!(report.shameless_loves.is_empty());
    assert!(report.perfect_harmony.is_empty());
    assert_eq!(report.archetype.name, "The Blank Slate");
    assert!(report.media_averages.is_empty());
    assert_eq!(report.media_insight, "Not enough data yet.");
    assert_eq!(report.sweet_spot.label, "Unknown");
    assert_eq!(report.sweet_spot.description, "Rate more items to find out.");
    assert_eq!(report.delta, 0.0);
    assert_eq!(report.above_line, 0);
    assert_eq!(report.below_line, 0);
}

#[test]
fn test_media_average_counts_sum_to_entries() {
    let entries = full_grid();
    let report = compute_stats(&entries);

    let total: usize = report.media_averages.iter().map(|m| m.count).sum();
    assert_eq!(total, entries.len());
    assert_eq!(report.media_averages.len(), MediaType::all_variants().len());
}

#[test]
fn test_line_counts_partition_entries() {
    let entries = full_grid();
    let report = compute_stats(&entries);

    let on_line = entries
        .iter()
        .filter(|e| e.head_rating == e.heart_rating)
        .count();
    assert_eq!(report.above_line + report.below_line + on_line, entries.len());
    assert_eq!(report.above_line, 10);
    assert_eq!(report.below_line, 10);
}

#[test]
fn test_delta_zero_iff_all_on_diagonal() {
    let diagonal: Vec<_> = (1..=5).map(|r| rated("d", r, r)).collect();
    assert_eq!(compute_stats(&diagonal).delta, 0.0);

    let mut off = diagonal.clone();
    off.push(rated("off", 2, 3));
    let delta = compute_stats(&off).delta;
    assert!(delta > 0.0);
}

#[test]
fn test_divergence_example() {
    let entries = vec![rated("cold", 5, 1), rated("love", 1, 5), rated("even", 3, 3)];
    let report = compute_stats(&entries);

    assert_eq!(report.cold_masterpieces, vec![entries[0].clone()]);
    assert_eq!(report.shameless_loves, vec![entries[1].clone()]);
    assert_eq!(report.perfect_harmony, vec![entries[2].clone()]);
    assert!((report.delta - 8.0 / 3.0).abs() < 1e-9);
    assert_eq!(format!("{:.3}", report.delta), "2.667");
    assert_eq!(report.above_line, 1);
    assert_eq!(report.below_line, 1);
}

#[test]
fn test_all_threes_is_chaotic_neutral_in_masterpiece() {
    let entries: Vec<_> = (0..10).map(|i| rated(&format!("m{}", i), 3, 3)).collect();
    let report = compute_stats(&entries);

    assert_eq!(report.archetype.name, "Chaotic Neutral");
    assert_eq!(
        report.void_zone,
        VoidZone::Void(vec![
            Quadrant::Academic,
            Quadrant::Trash,
            Quadrant::GuiltyPleasure
        ])
    );
    assert_eq!(report.void_zone_label(), "Academic, Trash, Guilty Pleasure");
    assert_eq!(report.perfect_harmony.len(), 10);
    assert_eq!(report.harmony_preview(5).more, 5);
}

#[test]
fn test_hot_zone_tie_prefers_first_entry() {
    let report = compute_stats(&[rated("a", 2, 2), rated("b", 4, 4)]);
    assert_eq!(report.hot_zone_label(), "Head 2 / Heart 2");

    let report = compute_stats(&[rated("b", 4, 4), rated("a", 2, 2)]);
    assert_eq!(
        report.hot_zone.map(|z| z.cell),
        Some(RatingCell { head: 4, heart: 4 })
    );
}

#[test]
fn test_full_grid_is_well_traveled() {
    let report = compute_stats(&full_grid());
    assert_eq!(report.void_zone, VoidZone::WellTraveled);
    assert_eq!(report.taste_grid.max_count, 1);
    assert_eq!(report.archetype.name, "Chaotic Neutral");
    assert_eq!(report.sweet_spot.label, "Head 3 / Heart 3");
}

#[test]
fn test_archetypes_from_profiles() {
    let golden: Vec<_> = (0..4).map(|_| rated("g", 2, 5)).collect();
    assert_eq!(compute_stats(&golden).archetype.name, "The Golden Retriever");

    let unicorn: Vec<_> = (0..4).map(|_| rated("u", 5, 4)).collect();
    let report = compute_stats(&unicorn);
    assert_eq!(report.archetype.name, "The Unicorn");
    assert!(report.sweet_spot.description.contains("award winners"));
}

#[test]
fn test_report_is_deterministic() {
    let entries = full_grid();
    assert_eq!(compute_stats(&entries), compute_stats(&entries));
}

#[test]
fn test_increasing_head_trend_is_non_decreasing() {
    let heads: [Rating; 10] = [1, 1, 2, 2, 3, 3, 4, 4, 5, 5];
    let entries: Vec<_> = heads
        .iter()
        .enumerate()
        .map(|(i, &head)| MediaEntry::new("t", MediaType::Book, head, 3, i as i64 * DAY_MS))
        .collect();

    assert_eq!(window_size(entries.len()), 2);
    let values: Vec<f64> = snobbery_index(&entries).map(|p| p.value).collect();
    assert_eq!(values.len(), 9);
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "{:?}", values);
}

#[test]
fn test_trend_ignores_input_order() {
    let mut entries: Vec<_> = (0..6)
        .map(|i| MediaEntry::new("t", MediaType::Book, (i % 5 + 1) as Rating, 5, i * DAY_MS))
        .collect();
    let forward: Vec<_> = softening_index(&entries, 5).collect();
    entries.reverse();
    let reversed: Vec<_> = softening_index(&entries, 5).collect();
    assert_eq!(forward, reversed);
    assert!(forward.iter().all(|p| p.value == 100.0));
}

#[test]
fn test_cache_matches_direct_computation() {
    let entries = full_grid();
    let mut cache = StatsCache::new();
    let cached = cache.report_for(&entries);
    assert_eq!(*cached, compute_stats(&entries));
}
