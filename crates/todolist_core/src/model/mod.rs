//! Domain model for the todo list.
//!
//! # Responsibility
//! - Define the canonical todo record and its validation rules.
//!
//! # Invariants
//! - Every todo is identified by a store-assigned `TodoId` that is never
//!   reused.
//! - Deletion is permanent; there is no tombstone state.

pub mod todo;
