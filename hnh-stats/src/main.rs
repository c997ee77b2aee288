//! hnh-stats - Taste analysis for a HeadandHeart entry export
//!
//! Reads a JSON array of rated entries, computes the taste report and
//! prints it as a text dashboard or JSON.
//!
//! **Usage:**
//! ```bash
//! hnh-stats entries.json [--type movie] [--format json] [--trends] [--list --sort rating]
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use hnh_common::config::{ConfigResolver, TomlConfig};
use hnh_common::{MediaEntry, MediaType};
use hnh_stats::browse::{filter_by_type, sort_entries, SortOption};
use hnh_stats::input::{load_entries, partition_valid, Rejected};
use hnh_stats::render::{render_report, RenderOptions, TrendSeries};
use hnh_stats::trend::{snobbery_index, softening_index};
use hnh_stats::{compute_stats, StatsReport};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Taste analysis for rated media entries
#[derive(Parser, Debug)]
#[command(name = "hnh-stats", version)]
#[command(about = "Analyze head/heart media ratings and print a taste report")]
struct Args {
    /// JSON file containing an array of media entries
    entries: PathBuf,

    /// Configuration file (overrides $HNH_CONFIG and the user config)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only analyze entries of this media type
    #[arg(long = "type", value_name = "TYPE", value_parser = parse_media_type)]
    media_type: Option<MediaType>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Include the moving-average taste evolution trends
    #[arg(long)]
    trends: bool,

    /// Print the entry list before the report
    #[arg(long)]
    list: bool,

    /// Entry list order: newest, oldest, az, za, rating[:HEAD_WEIGHT]
    #[arg(long, default_value = "newest")]
    sort: String,

    /// Fail on invalid entries instead of skipping them
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output document
#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a StatsReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    trends: Option<&'a TrendSeries>,
    /// Sorted entry list, present with --list
    #[serde(skip_serializing_if = "Option::is_none")]
    entries: Option<&'a [MediaEntry]>,
}

fn parse_media_type(s: &str) -> std::result::Result<MediaType, String> {
    s.parse::<MediaType>().map_err(|e| e.to_string())
}

fn init_tracing(config: &TomlConfig) {
    // RUST_LOG wins over the configured level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.logging.level.to_lowercase()));

    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, source) = ConfigResolver::new()
        .resolve(args.config.as_deref())
        .context("Failed to load configuration")?;

    init_tracing(&config);

    info!(
        "Starting hnh-stats v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Configuration source: {:?}", source);

    let sort = SortOption::from_arg(&args.sort, config.display.head_weight)
        .with_context(|| format!("Invalid --sort value '{}'", args.sort))?;

    let decoded = load_entries(&args.entries)
        .with_context(|| format!("Failed to read entries from {}", args.entries.display()))?;

    let (valid, invalid) = partition_valid(decoded.entries, &config.ratings);
    let mut rejected: Vec<Rejected> = decoded.rejected;
    rejected.extend(invalid);
    if !rejected.is_empty() {
        if args.strict {
            let first = &rejected[0];
            bail!(
                "{} invalid entries (first: '{}': {})",
                rejected.len(),
                first.label,
                first.reason
            );
        }
        warn!("Skipped {} invalid entries", rejected.len());
    }

    let mut entries = filter_by_type(&valid, args.media_type);
    if let Some(media_type) = args.media_type {
        info!("Filtered to {} {} entries", entries.len(), media_type.key());
    }

    let report = compute_stats(&entries);

    let trends = args.trends.then(|| TrendSeries {
        snobbery: snobbery_index(&entries).collect(),
        softening: softening_index(&entries, config.ratings.max).collect(),
    });

    if args.list {
        sort_entries(&mut entries, sort);
    }

    match args.format {
        OutputFormat::Json => {
            let output = JsonOutput {
                report: &report,
                trends: trends.as_ref(),
                entries: args.list.then_some(entries.as_slice()),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            if args.list {
                for entry in &entries {
                    println!(
                        "{} {:<40} Hd {} / Ht {}  {}",
                        entry.media_type.symbol(),
                        entry.title,
                        entry.head_rating,
                        entry.heart_rating,
                        hnh_common::time::format_date(entry.date_watched)
                    );
                }
                println!();
            }
            let options = RenderOptions {
                harmony_preview: config.display.harmony_preview,
            };
            print!("{}", render_report(&report, trends.as_ref(), &options));
        }
    }

    Ok(())
}
