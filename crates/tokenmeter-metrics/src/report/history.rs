//! Saved history snapshots
//!
//! A snapshot is the JSON array produced by serializing
//! `UsageTracker::history()`.

use crate::error::{Error, Result};
use crate::usage::UsageRecord;
use std::path::Path;
use tracing::debug;

/// Load a saved history snapshot
pub fn load_history(path: impl AsRef<Path>) -> Result<Vec<UsageRecord>> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<UsageRecord> =
        serde_json::from_str(&content).map_err(|source| Error::InvalidHistory {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(path = ?path, records = records.len(), "History loaded");
    Ok(records)
}
