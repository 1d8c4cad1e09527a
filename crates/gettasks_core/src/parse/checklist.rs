//! Checklist extraction from note bodies.
//!
//! # Responsibility
//! - Find `- [ ] label` / `- [x] label` lines in a note body.
//! - Strip provenance links previously appended by the renderer.
//!
//! # Invariants
//! - Only a lowercase `x` inside the brackets marks a task as done.
//! - Labels that are empty after cleaning are never returned.
//! - Any `*[[...dddd|...]]*` annotation is stripped, including ones a user
//!   typed by hand.

use crate::model::task::TaskOccurrence;
use once_cell::sync::Lazy;
use regex::Regex;

static TASK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*-[ \t]+\[(.*?)\](.*)$").expect("valid task regex"));
static PROVENANCE_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\[\[.*?\d{4}\|.*?(\.md)?\]\]\*").expect("valid provenance link regex")
});

/// Extracts checklist occurrences in body order.
pub fn extract_tasks(body: &str) -> Vec<TaskOccurrence> {
    TASK_LINE_RE
        .captures_iter(body)
        .filter_map(|caps| {
            let marker = caps.get(1).map_or("", |m| m.as_str());
            let raw_label = caps.get(2).map_or("", |m| m.as_str());
            let label = clean_label(raw_label);
            if label.is_empty() {
                return None;
            }
            Some(TaskOccurrence::new(label, marker == "x"))
        })
        .collect()
}

/// Removes provenance links and surrounding whitespace from a raw label.
pub fn clean_label(raw: &str) -> String {
    PROVENANCE_LINK_RE
        .replace_all(raw, "")
        .trim_matches(|c: char| c == ' ' || c == '\r' || c == '\n')
        .to_string()
}

/// Dedup key for a cleaned label.
pub fn normalize_key(label: &str) -> String {
    label.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::{clean_label, extract_tasks, normalize_key};
    use crate::model::task::TaskOccurrence;

    #[test]
    fn extracts_open_and_done_items_in_order() {
        let body = "intro\n- [ ] Call dentist\n  - [x] Pay rent\n- [X] Upper x is open\n";
        let tasks = extract_tasks(body);
        assert_eq!(
            tasks,
            vec![
                TaskOccurrence::new("Call dentist", false),
                TaskOccurrence::new("Pay rent", true),
                TaskOccurrence::new("Upper x is open", false),
            ]
        );
    }

    #[test]
    fn ignores_non_checklist_lines_and_empty_labels() {
        let body = "- plain bullet\n* [ ] star bullet\n- [ ]   \n-[ ] no space\n- [ ] kept";
        let tasks = extract_tasks(body);
        assert_eq!(tasks, vec![TaskOccurrence::new("kept", false)]);
    }

    #[test]
    fn bracket_content_stops_at_first_closing_bracket() {
        let tasks = extract_tasks("- [ ] read [[some note]] today");
        assert_eq!(tasks[0].label, "read [[some note]] today");
        assert!(!tasks[0].done);
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let tasks = extract_tasks("- [ ] first\r\n- [x] second\r\n");
        assert_eq!(tasks[0].label, "first");
        assert_eq!(tasks[1].label, "second");
        assert!(tasks[1].done);
    }

    #[test]
    fn strips_rendered_provenance_link() {
        let cleaned = clean_label(" Pay rent *[[1 Jan 2023|2023-01-01-daily.journal]]*");
        assert_eq!(cleaned, "Pay rent");
        assert_eq!(normalize_key(&cleaned), normalize_key("Pay rent"));
    }

    #[test]
    fn keeps_links_without_a_year() {
        let cleaned = clean_label("see *[[project|notes]]*");
        assert_eq!(cleaned, "see *[[project|notes]]*");
    }

    #[test]
    fn normalize_key_lowercases() {
        assert_eq!(normalize_key("Buy Milk"), normalize_key("buy milk"));
    }
}
