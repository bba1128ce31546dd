//! JSON persistence sink for the two output collections.

use std::path::Path;

use serde::Serialize;

use crate::error::{Result, ScrapeError};
use crate::scraper::ScrapeOutcome;

/// Serialize a record slice as an indented JSON array and write it to
/// `path`, overwriting any prior run's output. Non-ASCII text is written
/// verbatim, not escaped.
pub fn write_records<T: Serialize>(records: &[T], path: &Path) -> Result<()> {
    let document = serde_json::to_string_pretty(records)?;

    std::fs::write(path, document).map_err(|source| {
        tracing::error!("Error saving to {}: {}", path.display(), source);
        ScrapeError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::info!(
        "Successfully saved {} records to {}",
        records.len(),
        path.display()
    );
    Ok(())
}

/// Write both output documents, users first.
pub fn write_outcome(outcome: &ScrapeOutcome, users_path: &Path, repos_path: &Path) -> Result<()> {
    write_records(&outcome.users, users_path)?;
    write_records(&outcome.repositories, repos_path)
}
