//! # HeadandHeart Taste Analytics
//!
//! Turns a user's rated media entries into the taste dashboard:
//! - Stats report (hot/void zones, divergence, archetype, media battle,
//!   sweet spot, delta) via [`compute_stats`]
//! - Moving-average trends over watch date
//! - Caller-owned memoization keyed on entry content
//! - Entry list filtering and sorting
//! - Plain-text rendering

pub mod browse;
pub mod cache;
pub mod input;
pub mod render;
pub mod stats;
pub mod trend;

pub use cache::StatsCache;
pub use stats::{compute_stats, StatsReport};
pub use trend::{trend, RatingAxis, TrendMetric, TrendPoint};
