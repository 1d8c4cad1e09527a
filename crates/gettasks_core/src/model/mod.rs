//! Domain records shared by the loader, fold engine and renderer.
//!
//! # Responsibility
//! - Describe loaded note files and the tasks folded out of them.
//!
//! # Invariants
//! - A `NoteFile` is immutable once loaded.
//! - A `Task` inherits its creation time from its origin note.

pub mod note;
pub mod task;
