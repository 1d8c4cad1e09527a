//! Pending-task fold engine.
//!
//! # Responsibility
//! - Decide which notes contribute tasks.
//! - Fold task occurrences oldest-note-first into one map keyed by the
//!   normalized label.
//!
//! # Invariants
//! - At most one `Task` exists per normalized label.
//! - Done is sticky: once any occurrence is done, the label stays in the map
//!   as a done tombstone and later undone sightings never bring it back.
//! - The first sighting's label, origin and creation time are retained.

use crate::model::note::NoteFile;
use crate::model::task::Task;
use crate::parse::checklist::{extract_tasks, normalize_key};
use crate::render::render_pending_in;
use crate::repo::note_repo::{LoadReport, NoteRepository, RepoResult};
use chrono::{Local, TimeZone};
use log::{debug, info};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Default hierarchy marker for daily journal notes.
pub const DEFAULT_HIERARCHY: &str = "daily.journal";

const TEMPLATE_MARKER: &str = "template";

/// State change for one occurrence of a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldStep {
    /// Label is new: record it with the occurrence's completion.
    Insert,
    /// Label is pending and this occurrence is done: close it for good.
    Complete,
    /// Nothing changes.
    Keep,
}

/// Transition for one occurrence given the current entry for its key.
///
/// A label first seen as done is recorded as done, so it never becomes
/// pending afterwards.
pub fn fold_occurrence(current: Option<&Task>, occurrence_done: bool) -> FoldStep {
    match current {
        None => FoldStep::Insert,
        Some(task) if !task.done && occurrence_done => FoldStep::Complete,
        Some(_) => FoldStep::Keep,
    }
}

/// Eligibility rules for contributing notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskFilter {
    /// Path of the note being edited, as given on the command line.
    pub current_file: String,
    /// Substring a note path must contain to contribute.
    pub hierarchy: String,
}

impl TaskFilter {
    pub fn new(current_file: impl Into<String>, hierarchy: impl Into<String>) -> Self {
        Self {
            current_file: current_file.into(),
            hierarchy: hierarchy.into(),
        }
    }

    /// Returns whether a note at `path` may contribute tasks.
    ///
    /// The current-file rule is a substring test: a note is excluded when the
    /// current-file argument contains its path, so `./vault/today.md` also
    /// excludes `vault/today.md`.
    pub fn is_eligible(&self, path: &str) -> bool {
        if self.current_file.contains(path) {
            return false;
        }
        if !path.contains(self.hierarchy.as_str()) {
            return false;
        }
        !path.contains(TEMPLATE_MARKER)
    }
}

/// Folded task map keyed by normalized label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingTasks {
    tasks: BTreeMap<String, Task>,
}

impl PendingTasks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds every checklist item of `note` into the map.
    pub fn fold_note(&mut self, note: &NoteFile) {
        for occurrence in extract_tasks(&note.content) {
            let key = normalize_key(&occurrence.label);
            match self.tasks.entry(key) {
                Entry::Vacant(slot) => {
                    if fold_occurrence(None, occurrence.done) == FoldStep::Insert {
                        let key = slot.key().clone();
                        slot.insert(Task {
                            key,
                            label: occurrence.label,
                            done: occurrence.done,
                            origin: note.path.clone(),
                            created: note.created,
                        });
                    }
                }
                Entry::Occupied(mut slot) => {
                    if fold_occurrence(Some(slot.get()), occurrence.done) == FoldStep::Complete {
                        debug!(
                            "event=task_fold module=service status=ok action=complete path={}",
                            note.path.display()
                        );
                        slot.get_mut().done = true;
                    }
                }
            }
        }
    }

    /// Tasks not marked done, in key order.
    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.tasks.values().filter(|task| !task.done)
    }

    /// Looks up a task by its normalized key.
    pub fn get(&self, key: &str) -> Option<&Task> {
        self.tasks.get(key)
    }

    /// Number of known labels, done ones included.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Folds eligible notes oldest-first into a pending set.
///
/// Notes with equal creation time keep their input order.
pub fn collect_pending(notes: &[NoteFile], filter: &TaskFilter) -> PendingTasks {
    let mut ordered: Vec<&NoteFile> = notes.iter().collect();
    ordered.sort_by_key(|note| note.created);

    let mut pending = PendingTasks::new();
    let mut folded = 0usize;
    for note in ordered {
        if !filter.is_eligible(&note.path_text()) {
            continue;
        }
        pending.fold_note(note);
        folded += 1;
    }

    info!(
        "event=tasks_fold module=service status=ok notes={} folded={} tasks={}",
        notes.len(),
        folded,
        pending.len()
    );
    pending
}

/// Rendered run result plus the notes it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskReport {
    /// Markdown checklist of pending tasks; empty when there are none.
    pub rendered: String,
    /// Load outcome, reused for write-back target lookup.
    pub load: LoadReport,
}

/// Pipeline facade over a note source.
pub struct TaskService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> TaskService<R> {
    /// Creates a service using the provided note source.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads notes, folds eligible ones, and renders the pending set with
    /// local dates.
    pub fn pending_tasks(&self, filter: &TaskFilter) -> RepoResult<TaskReport> {
        self.pending_tasks_in(filter, &Local)
    }

    /// Same as `pending_tasks`, with dates rendered in `tz`.
    pub fn pending_tasks_in<Tz>(&self, filter: &TaskFilter, tz: &Tz) -> RepoResult<TaskReport>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let load = self.repo.load_notes()?;
        let pending = collect_pending(&load.notes, filter);
        let rendered = render_pending_in(&pending, tz);
        Ok(TaskReport { rendered, load })
    }
}
