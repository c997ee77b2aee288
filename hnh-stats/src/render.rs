//! Plain-text rendering of a stats report
//!
//! Mirrors the dashboard sections: taste galaxy, divergence, archetype,
//! media-type battle, taste evolution, recommendation and delta.

use crate::stats::zones::GRID_SIZE;
use crate::stats::StatsReport;
use crate::trend::TrendPoint;
use hnh_common::{MediaEntry, Rating};
use serde::Serialize;
use std::fmt::Write;

/// Rendering preferences
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Perfect-harmony entries listed before "...and N more"
    pub harmony_preview: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { harmony_preview: 5 }
    }
}

/// Smoothed series to include in the taste evolution section
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrendSeries {
    /// Mean head rating over time
    pub snobbery: Vec<TrendPoint>,
    /// Percentage of perfect heart ratings over time
    pub softening: Vec<TrendPoint>,
}

/// Render the full report as text
pub fn render_report(
    report: &StatsReport,
    trends: Option<&TrendSeries>,
    options: &RenderOptions,
) -> String {
    let mut out = String::new();
    write_report(&mut out, report, trends, options).expect("writing to a String cannot fail");
    out
}

fn write_report(
    out: &mut String,
    report: &StatsReport,
    trends: Option<&TrendSeries>,
    options: &RenderOptions,
) -> std::fmt::Result {
    writeln!(out, "Taste Analysis ({} entries)", report.entry_count)?;

    section(out, "1. The Taste Galaxy (Heatmap)")?;
    write_grid(out, report)?;
    writeln!(out, "Hot Zone: {}", report.hot_zone_label())?;
    writeln!(out, "The Void: {}", report.void_zone_label())?;

    section(out, "2. The Divergence Score")?;
    write_category(out, "Cold Masterpieces (High Head, Low Heart)", &report.cold_masterpieces, 0)?;
    write_category(out, "Shameless Loves (Low Head, High Heart)", &report.shameless_loves, 0)?;
    let harmony = report.harmony_preview(options.harmony_preview);
    write_category(out, "Perfect Harmony (Head = Heart)", harmony.shown, harmony.more)?;

    section(out, "3. Reviewer Archetype")?;
    writeln!(out, "{} {}", report.archetype.symbol, report.archetype.name)?;
    writeln!(out, "{}", report.archetype.description)?;

    section(out, "4. Media-Type Battle")?;
    for average in &report.media_averages {
        writeln!(
            out,
            "{} {} x{} (Hd {:.1} / Ht {:.1})",
            average.media_type.symbol(),
            average.media_type,
            average.count,
            average.avg_head,
            average.avg_heart
        )?;
    }
    writeln!(out, "{}", report.media_insight)?;

    if let Some(trends) = trends {
        section(out, "5. Taste Evolution")?;
        write_trend(out, "The \"Snobbery\" Index (average Head over time)", &trends.snobbery, 1)?;
        write_trend(out, "The \"Softening\" Index (% of perfect Heart over time)", &trends.softening, 0)?;
    }

    section(out, "6. What to Watch Next")?;
    writeln!(out, "Your Sweet Spot: {}", report.sweet_spot.label)?;
    writeln!(out, "{}", report.sweet_spot.description)?;

    section(out, "7. The Nerd Feature: Delta")?;
    writeln!(out, "Average Delta Score: {:.2}", report.delta)?;
    writeln!(out, "{}", report.delta_verdict())?;
    writeln!(out, "Above Line: {} items (Respect > Enjoy)", report.above_line)?;
    writeln!(out, "Below Line: {} items (Enjoy > Respect)", report.below_line)?;

    Ok(())
}

fn section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "== {} ==", title)
}

/// Heatmap with head 5 on the top row and heart 1 in the left column
fn write_grid(out: &mut String, report: &StatsReport) -> std::fmt::Result {
    let grid = &report.taste_grid;
    for head in (1..=GRID_SIZE as Rating).rev() {
        write!(out, "Head {} |", head)?;
        for heart in 1..=GRID_SIZE as Rating {
            match grid.count(head, heart) {
                0 => write!(out, "   .")?,
                n => write!(out, "{:>4}", n)?,
            }
        }
        writeln!(out)?;
    }
    write!(out, "        ")?;
    for heart in 1..=GRID_SIZE {
        write!(out, "{:>4}", heart)?;
    }
    writeln!(out, "  <- Heart")
}

fn write_category(
    out: &mut String,
    title: &str,
    entries: &[MediaEntry],
    more: usize,
) -> std::fmt::Result {
    writeln!(out, "{}", title)?;
    if entries.is_empty() {
        return writeln!(out, "  None found yet.");
    }
    for entry in entries {
        writeln!(
            out,
            "  - {} {}/{}",
            entry.title, entry.head_rating, entry.heart_rating
        )?;
    }
    if more > 0 {
        writeln!(out, "  ...and {} more", more)?;
    }
    Ok(())
}

fn write_trend(
    out: &mut String,
    title: &str,
    points: &[TrendPoint],
    precision: usize,
) -> std::fmt::Result {
    writeln!(out, "{}", title)?;
    if points.is_empty() {
        return writeln!(out, "  Need more data");
    }
    let values: Vec<String> = points
        .iter()
        .map(|p| format!("{:.*}", precision, p.value))
        .collect();
    writeln!(out, "  Oldest -> Newest: {}", values.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::compute_stats;
    use crate::trend::{snobbery_index, softening_index};
    use hnh_common::MediaType;

    fn entries() -> Vec<MediaEntry> {
        (0..8u8)
            .map(|i| {
                MediaEntry::new(
                    format!("Film {}", i),
                    MediaType::Movie,
                    3 + i % 3,
                    3 + i % 3,
                    i64::from(i),
                )
            })
            .collect()
    }

    #[test]
    fn test_render_empty_report() {
        let text = render_report(&StatsReport::empty(), None, &RenderOptions::default());
        assert!(text.contains("Hot Zone: N/A"));
        assert!(text.contains("The Void: Academic, Masterpiece, Trash, Guilty Pleasure"));
        assert!(text.contains("The Blank Slate"));
        assert!(text.contains("Your Sweet Spot: Unknown"));
        assert!(text.contains("None found yet."));
        assert!(!text.contains("Taste Evolution"));
    }

    #[test]
    fn test_render_harmony_preview_more_count() {
        let entries = entries();
        let report = compute_stats(&entries);
        let text = render_report(&report, None, &RenderOptions { harmony_preview: 5 });
        assert!(text.contains("...and 3 more"));
    }

    #[test]
    fn test_render_trends() {
        let entries = entries();
        let report = compute_stats(&entries);
        let trends = TrendSeries {
            snobbery: snobbery_index(&entries).collect(),
            softening: softening_index(&entries, 5).collect(),
        };
        let text = render_report(&report, Some(&trends), &RenderOptions::default());
        assert!(text.contains("== 5. Taste Evolution =="));
        assert!(text.contains("Oldest -> Newest: 3.5 4.5"));
    }

    #[test]
    fn test_render_report_matches_writer_output() {
        let report = compute_stats(&entries());
        let mut direct = String::new();
        write_report(&mut direct, &report, None, &RenderOptions::default()).unwrap();
        assert_eq!(render_report(&report, None, &RenderOptions::default()), direct);
        assert!(direct.ends_with("(Enjoy > Respect)\n"));
    }

    #[test]
    fn test_render_trend_need_more_data() {
        let mut out = String::new();
        write_trend(&mut out, "t", &[], 1).unwrap();
        assert!(out.contains("Need more data"));
    }
}
