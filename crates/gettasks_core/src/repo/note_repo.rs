//! Note loader contract and filesystem implementation.
//!
//! # Responsibility
//! - Enumerate `*.md` files directly inside one directory.
//! - Parse front matter and derive creation time for each note.
//!
//! # Invariants
//! - Enumeration is non-recursive.
//! - Loaded notes are returned in path order; callers sort by creation time.
//! - Per-file failures are collected in `LoadReport::skipped`.

use crate::model::note::NoteFile;
use crate::parse::frontmatter::split_front_matter;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Result type for note loading.
pub type RepoResult<T> = Result<T, RepoError>;

/// Loader error for failures that prevent any note from loading.
#[derive(Debug)]
pub enum RepoError {
    /// The scan directory cannot be listed.
    ReadDir {
        dir: PathBuf,
        source: std::io::Error,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReadDir { dir, source } => {
                write!(f, "cannot list note directory `{}`: {source}", dir.display())
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ReadDir { source, .. } => Some(source),
        }
    }
}

/// Note that could not be loaded, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNote {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one directory load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Successfully parsed notes, sorted by path.
    pub notes: Vec<NoteFile>,
    /// Notes skipped because of read or parse failures.
    pub skipped: Vec<SkippedNote>,
}

/// Source of note files.
pub trait NoteRepository {
    /// Loads every note visible to this source.
    fn load_notes(&self) -> RepoResult<LoadReport>;
}

/// Filesystem-backed loader scanning one directory.
pub struct FsNoteRepository {
    dir: PathBuf,
}

impl FsNoteRepository {
    /// Creates a loader for `dir`. An empty path means the working directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates a loader for the directory containing `current_file`.
    pub fn for_current_file(current_file: impl AsRef<Path>) -> Self {
        let dir = current_file
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self::new(dir)
    }

    /// Directory scanned by this loader.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn list_markdown_paths(&self) -> RepoResult<Vec<PathBuf>> {
        // Listing "" is not possible, but paths stay relative like the input.
        let listing_dir = if self.dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            self.dir.as_path()
        };
        let entries = std::fs::read_dir(listing_dir).map_err(|source| RepoError::ReadDir {
            dir: listing_dir.to_path_buf(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(
                        "event=notes_list module=repo status=skip dir={} error={}",
                        listing_dir.display(),
                        err
                    );
                    continue;
                }
            };
            let is_file = entry.file_type().map(|kind| !kind.is_dir()).unwrap_or(false);
            let name = entry.file_name();
            if !is_file || Path::new(&name).extension().map_or(true, |ext| ext != "md") {
                continue;
            }
            paths.push(self.dir.join(name));
        }
        paths.sort();
        Ok(paths)
    }
}

impl NoteRepository for FsNoteRepository {
    fn load_notes(&self) -> RepoResult<LoadReport> {
        let started_at = Instant::now();
        let paths = self.list_markdown_paths()?;

        let mut report = LoadReport::default();
        for path in paths {
            match load_note(&path) {
                Ok(note) => report.notes.push(note),
                Err(reason) => {
                    warn!(
                        "event=note_load module=repo status=skip path={} reason={}",
                        path.display(),
                        reason
                    );
                    report.skipped.push(SkippedNote { path, reason });
                }
            }
        }

        info!(
            "event=notes_load module=repo status=ok dir={} loaded={} skipped={} duration_ms={}",
            self.dir.display(),
            report.notes.len(),
            report.skipped.len(),
            started_at.elapsed().as_millis()
        );
        Ok(report)
    }
}

fn load_note(path: &Path) -> Result<NoteFile, String> {
    let raw = std::fs::read_to_string(path).map_err(|err| format!("read failed: {err}"))?;
    let (matter, body) = split_front_matter(&raw).map_err(|err| err.to_string())?;
    Ok(NoteFile::new(path, matter, body))
}
