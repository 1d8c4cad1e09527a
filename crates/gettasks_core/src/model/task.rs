//! Task records produced by extraction and folding.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// One checklist line as it appears in a note body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOccurrence {
    /// Cleaned label text (provenance links stripped, trimmed).
    pub label: String,
    /// `true` only when the checkbox holds a lowercase `x`.
    pub done: bool,
}

impl TaskOccurrence {
    pub fn new(label: impl Into<String>, done: bool) -> Self {
        Self {
            label: label.into(),
            done,
        }
    }
}

/// Deduplicated task keyed by its normalized label.
///
/// Metadata always comes from the earliest sighting of the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Lowercased label used as the dedup key.
    pub key: String,
    /// Label as written in the origin note.
    pub label: String,
    pub done: bool,
    /// Note in which the label was first seen.
    pub origin: PathBuf,
    /// Creation time inherited from the origin note.
    pub created: DateTime<Utc>,
}
