//! Caller-owned memoization of the last computed report
//!
//! The report is a pure function of the entry list, so recomputing is always
//! correct; the cache only skips work when the list content has not changed.
//! Content is identified by a SHA-256 fingerprint over every entry field in
//! order, so reordering the list counts as a change (tie-breaks depend on it).

use crate::stats::{compute_stats, StatsReport};
use hnh_common::MediaEntry;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::debug;

/// SHA-256 digest of an entry list
pub type Fingerprint = [u8; 32];

/// Fingerprint the content of an entry list
pub fn fingerprint(entries: &[MediaEntry]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update((entries.len() as u64).to_le_bytes());
    for entry in entries {
        // Length-prefix variable fields so adjacent values cannot run together
        update_str(&mut hasher, entry.id.as_str());
        update_str(&mut hasher, &entry.title);
        update_str(&mut hasher, entry.media_type.key());
        hasher.update([entry.head_rating, entry.heart_rating]);
        hasher.update(entry.date_watched.to_le_bytes());
        match &entry.notes {
            Some(notes) => {
                hasher.update([1u8]);
                update_str(&mut hasher, notes);
            }
            None => hasher.update([0u8]),
        }
    }

    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// Remembers the report for the most recent entry list
#[derive(Debug, Default)]
pub struct StatsCache {
    last: Option<(Fingerprint, Arc<StatsReport>)>,
    hits: u64,
    misses: u64,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for `entries`, recomputed only when their content changed
    pub fn report_for(&mut self, entries: &[MediaEntry]) -> Arc<StatsReport> {
        let key = fingerprint(entries);

        if let Some((cached_key, report)) = &self.last {
            if *cached_key == key {
                self.hits += 1;
                debug!(entries = entries.len(), "Stats cache hit");
                return Arc::clone(report);
            }
        }

        self.misses += 1;
        debug!(entries = entries.len(), "Stats cache miss, recomputing");
        let report = Arc::new(compute_stats(entries));
        self.last = Some((key, Arc::clone(&report)));
        report
    }

    /// Drop the cached report
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hnh_common::MediaType;

    fn sample() -> Vec<MediaEntry> {
        vec![
            MediaEntry::new("Dune", MediaType::Book, 5, 4, 1),
            MediaEntry::new("Hades", MediaType::VideoGame, 4, 5, 2),
        ]
    }

    #[test]
    fn test_fingerprint_stable() {
        let entries = sample();
        assert_eq!(fingerprint(&entries), fingerprint(&entries.clone()));
    }

    #[test]
    fn test_fingerprint_sensitive_to_ratings_and_order() {
        let entries = sample();
        let mut changed = entries.clone();
        changed[0].heart_rating = 3;
        assert_ne!(fingerprint(&entries), fingerprint(&changed));

        let mut reversed = entries.clone();
        reversed.reverse();
        assert_ne!(fingerprint(&entries), fingerprint(&reversed));
    }

    #[test]
    fn test_fingerprint_distinguishes_notes() {
        let entries = sample();
        let mut noted = entries.clone();
        noted[1].notes = Some(String::new());
        assert_ne!(fingerprint(&entries), fingerprint(&noted));
    }

    #[test]
    fn test_cache_hit_returns_same_report() {
        let entries = sample();
        let mut cache = StatsCache::new();
        let first = cache.report_for(&entries);
        let second = cache.report_for(&entries);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_cache_recomputes_on_change() {
        let mut entries = sample();
        let mut cache = StatsCache::new();
        let first = cache.report_for(&entries);
        entries.push(MediaEntry::new("Azul", MediaType::BoardGame, 3, 3, 3));
        let second = cache.report_for(&entries);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.entry_count, 3);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn test_invalidate_forces_recompute() {
        let entries = sample();
        let mut cache = StatsCache::new();
        let first = cache.report_for(&entries);
        cache.invalidate();
        let second = cache.report_for(&entries);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }
}
