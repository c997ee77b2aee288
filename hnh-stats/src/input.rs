//! Entry list input: JSON exports from the entry store
//!
//! An export is a JSON array. Elements that fail to decode (unknown media
//! type, negative or fractional ratings) or fail validation are rejected
//! one by one; the rest of the export is still analyzed.

use hnh_common::{Error, MediaEntry, RatingScale, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// An export element that was skipped, with the reason
#[derive(Debug)]
pub struct Rejected {
    /// Entry title, or `#<index>` when the element has none
    pub label: String,
    pub reason: Error,
}

/// Decoded entries plus the elements that failed to decode
#[derive(Debug, Default)]
pub struct Decoded {
    pub entries: Vec<MediaEntry>,
    pub rejected: Vec<Rejected>,
}

/// Read a JSON array of entries from a file
pub fn load_entries(path: &Path) -> Result<Decoded> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::NotFound(format!("Entries file not found: {}", path.display()))
        } else {
            Error::Io(e)
        }
    })?;
    let decoded = parse_entries(&content)?;
    info!(
        "Loaded {} entries from {} ({} undecodable)",
        decoded.entries.len(),
        path.display(),
        decoded.rejected.len()
    );
    Ok(decoded)
}

/// Parse a JSON array of entries, element by element
///
/// Fails only when the document is not a JSON array.
pub fn parse_entries(json: &str) -> Result<Decoded> {
    let elements: Vec<Value> = serde_json::from_str(json)?;
    let mut decoded = Decoded::default();

    for (index, element) in elements.iter().enumerate() {
        match MediaEntry::deserialize(element) {
            Ok(entry) => decoded.entries.push(entry),
            Err(e) => {
                let label = element
                    .get("title")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{}", index));
                warn!("Skipping undecodable entry {}: {}", label, e);
                decoded.rejected.push(Rejected {
                    label,
                    reason: Error::Json(e),
                });
            }
        }
    }

    Ok(decoded)
}

/// Split entries into valid ones and rejects, keeping input order
pub fn partition_valid(
    entries: Vec<MediaEntry>,
    scale: &RatingScale,
) -> (Vec<MediaEntry>, Vec<Rejected>) {
    let mut valid = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();

    for entry in entries {
        match entry.validate(scale) {
            Ok(()) => valid.push(entry),
            Err(e) => {
                warn!("Skipping entry {}: {}", entry.id, e);
                rejected.push(Rejected {
                    label: entry.title,
                    reason: e,
                });
            }
        }
    }

    (valid, rejected)
}
