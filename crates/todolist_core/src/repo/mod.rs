//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the store contract for todo persistence.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes validate input before any SQL mutation.
//! - Operations on a vanished id resolve to a defined no-op outcome, not
//!   an error.

pub mod todo_repo;
