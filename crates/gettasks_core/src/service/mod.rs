//! Use-case services.
//!
//! # Responsibility
//! - Fold extracted checklist items from many notes into one pending set.
//! - Orchestrate load, fold and render for the CLI.

pub mod task_service;
