//! Write-back of rendered tasks into the current note.
//!
//! # Responsibility
//! - Locate the loaded note matching the current-file argument.
//! - Append rendered markdown to that note on disk.
//!
//! # Invariants
//! - The note is re-read right before writing; the loaded body is never used
//!   as the base.
//! - No separator is inserted between existing content and rendered text.
//! - A newly created file gets mode 0644 on Unix; existing files keep theirs.

use crate::model::note::NoteFile;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Write-back failure.
#[derive(Debug)]
pub enum SinkError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for SinkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read `{}` before append: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "cannot write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for SinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}

/// Returns the loaded note for `current_file`.
///
/// An exact path match wins; otherwise the first note whose path contains
/// `current_file` is returned. Callers write to `current_file` itself, the
/// match only confirms the note was loaded.
pub fn find_target<'a>(notes: &'a [NoteFile], current_file: &str) -> Option<&'a NoteFile> {
    let current = Path::new(current_file);
    notes
        .iter()
        .find(|note| note.path == current)
        .or_else(|| {
            notes
                .iter()
                .find(|note| note.path_text().contains(current_file))
        })
}

/// Appends `rendered` to the file at `path`, rewriting it in place.
pub fn append_rendered(path: &Path, rendered: &str) -> Result<(), SinkError> {
    let mut contents = std::fs::read(path).map_err(|source| SinkError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    contents.extend_from_slice(rendered.as_bytes());

    let write_err = |source| SinkError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(NEW_FILE_MODE);
    }
    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(&contents).map_err(write_err)?;

    info!(
        "event=note_append module=sink status=ok path={} bytes={}",
        path.display(),
        rendered.len()
    );
    Ok(())
}
