//! Note sources.
//!
//! # Responsibility
//! - Define the contract for loading note files.
//! - Isolate filesystem access from folding and rendering.
//!
//! # Invariants
//! - A single unreadable or malformed note never aborts a load; it is
//!   reported as skipped.

pub mod note_repo;
