//! Core logic for collecting pending checklist tasks from dated notes.
//! The CLI crate is a thin shell around the pipeline defined here.

pub mod logging;
pub mod model;
pub mod parse;
pub mod render;
pub mod repo;
pub mod service;
pub mod sink;

pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::note::{created_from_matter, NoteFile};
pub use model::task::{Task, TaskOccurrence};
pub use parse::checklist::{clean_label, extract_tasks, normalize_key};
pub use parse::frontmatter::{split_front_matter, FrontMatter, FrontMatterError};
pub use render::{render_pending, render_pending_in};
pub use repo::note_repo::{
    FsNoteRepository, LoadReport, NoteRepository, RepoError, RepoResult, SkippedNote,
};
pub use service::task_service::{
    collect_pending, fold_occurrence, FoldStep, PendingTasks, TaskFilter, TaskReport, TaskService,
    DEFAULT_HIERARCHY,
};
pub use sink::{append_rendered, find_target, SinkError};
