//! Loaded note file record.
//!
//! # Responsibility
//! - Hold one markdown note after front-matter splitting.
//! - Derive the note creation time from the `created` metadata field.
//!
//! # Invariants
//! - `created` has whole-second precision; the millisecond remainder of the
//!   `created` field is discarded.
//! - Missing or non-numeric `created` values map to the Unix epoch.

use crate::parse::frontmatter::FrontMatter;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Metadata key holding the note creation time in epoch milliseconds.
pub const CREATED_KEY: &str = "created";

/// One markdown note discovered in the scan directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    /// Path as discovered by the loader (scan directory joined with file name).
    pub path: PathBuf,
    /// Body text after the front-matter block.
    pub content: String,
    /// Flat metadata mapping from the front-matter block.
    pub matter: FrontMatter,
    /// Creation time derived from `matter["created"]`.
    pub created: DateTime<Utc>,
}

impl NoteFile {
    /// Builds a note record and derives `created` from its metadata.
    pub fn new(path: impl Into<PathBuf>, matter: FrontMatter, content: impl Into<String>) -> Self {
        let created = created_from_matter(&matter);
        Self {
            path: path.into(),
            content: content.into(),
            matter,
            created,
        }
    }

    /// Base file name with the trailing `.md` removed.
    pub fn stem(&self) -> String {
        file_stem(&self.path)
    }

    /// Path rendered as text for substring matching.
    pub fn path_text(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

/// Reads `created` as epoch milliseconds and truncates to whole seconds.
pub fn created_from_matter(matter: &FrontMatter) -> DateTime<Utc> {
    matter
        .get(CREATED_KEY)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .and_then(|millis| DateTime::from_timestamp(millis / 1000, 0))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

pub(crate) fn file_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind(".md") {
        Some(index) => name[..index].to_string(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::{created_from_matter, NoteFile};
    use crate::parse::frontmatter::FrontMatter;
    use chrono::{DateTime, Utc};

    fn matter(created: &str) -> FrontMatter {
        let mut matter = FrontMatter::new();
        matter.insert("created".to_string(), created.to_string());
        matter
    }

    #[test]
    fn created_drops_sub_second_precision() {
        let created = created_from_matter(&matter("1672531200999"));
        assert_eq!(created.timestamp(), 1_672_531_200);
        assert_eq!(created.timestamp_subsec_millis(), 0);
    }

    #[test]
    fn created_defaults_to_epoch_when_missing_or_invalid() {
        assert_eq!(created_from_matter(&FrontMatter::new()), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(created_from_matter(&matter("yesterday")), DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(created_from_matter(&matter("")), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn stem_strips_markdown_extension() {
        let note = NoteFile::new(
            "vault/2023-01-01-daily.journal.md",
            FrontMatter::new(),
            "",
        );
        assert_eq!(note.stem(), "2023-01-01-daily.journal");
    }
}
