//! Text parsers for note files.
//!
//! # Responsibility
//! - Split raw note text into front matter and body.
//! - Extract checklist items from a note body.
//!
//! # Invariants
//! - Parsers are pure: no filesystem access, no logging side effects beyond
//!   debug diagnostics.

pub mod checklist;
pub mod frontmatter;
