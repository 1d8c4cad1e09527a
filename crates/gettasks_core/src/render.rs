//! Markdown rendering of the pending set.
//!
//! # Responsibility
//! - Order pending tasks newest-origin-first.
//! - Emit one checklist line per task with a provenance link to its origin.
//!
//! # Invariants
//! - Ties on creation time are broken by normalized key, ascending.
//! - Lines are joined by `\n` with no trailing newline.
//! - Every emitted line is recognized by the extractor, and its provenance
//!   link is stripped again on re-extraction.

use crate::model::note::file_stem;
use crate::service::task_service::PendingTasks;
use chrono::{Local, TimeZone};
use std::fmt::Display;

const DATE_FORMAT: &str = "%-d %b %Y";

/// Renders pending tasks with dates in the local time zone.
pub fn render_pending(pending: &PendingTasks) -> String {
    render_pending_in(pending, &Local)
}

/// Renders pending tasks with dates shown in `tz`.
pub fn render_pending_in<Tz>(pending: &PendingTasks, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut tasks: Vec<_> = pending.pending().collect();
    tasks.sort_by(|a, b| b.created.cmp(&a.created).then_with(|| a.key.cmp(&b.key)));

    tasks
        .into_iter()
        .map(|task| {
            format!(
                "- [ ] {} *[[{}|{}]]*",
                task.label,
                task.created.with_timezone(tz).format(DATE_FORMAT),
                file_stem(&task.origin)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::render_pending_in;
    use crate::model::note::NoteFile;
    use crate::parse::checklist::{extract_tasks, normalize_key};
    use crate::parse::frontmatter::FrontMatter;
    use crate::service::task_service::PendingTasks;
    use chrono::Utc;

    fn note(path: &str, created_ms: i64, body: &str) -> NoteFile {
        let mut matter = FrontMatter::new();
        matter.insert("created".to_string(), created_ms.to_string());
        NoteFile::new(path, matter, body)
    }

    #[test]
    fn renders_single_task_with_provenance() {
        let mut pending = PendingTasks::new();
        pending.fold_note(&note(
            "vault/2023-01-01-daily.journal.md",
            1_672_531_200_000,
            "- [ ] Pay rent",
        ));
        assert_eq!(
            render_pending_in(&pending, &Utc),
            "- [ ] Pay rent *[[1 Jan 2023|2023-01-01-daily.journal]]*"
        );
    }

    #[test]
    fn orders_newest_first_then_by_key() {
        let mut pending = PendingTasks::new();
        pending.fold_note(&note("old.md", 1_000, "- [ ] zebra\n- [ ] Apple"));
        pending.fold_note(&note("new.md", 86_400_000, "- [ ] middle"));
        let rendered = render_pending_in(&pending, &Utc);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "- [ ] middle *[[2 Jan 1970|new]]*",
                "- [ ] Apple *[[1 Jan 1970|old]]*",
                "- [ ] zebra *[[1 Jan 1970|old]]*",
            ]
        );
    }

    #[test]
    fn empty_pending_set_renders_empty_string() {
        assert_eq!(render_pending_in(&PendingTasks::new(), &Utc), "");
    }

    #[test]
    fn rendered_output_re_extracts_to_same_keys() {
        let mut pending = PendingTasks::new();
        pending.fold_note(&note("2023.daily.journal.md", 1_672_531_200_000, "- [ ] Call Mom"));
        let rendered = render_pending_in(&pending, &Utc);

        let again = extract_tasks(&rendered);
        assert_eq!(again.len(), 1);
        assert_eq!(normalize_key(&again[0].label), "call mom");
        assert!(!again[0].done);
    }
}
