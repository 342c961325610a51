//! Todo domain record.
//!
//! # Responsibility
//! - Define the persisted row shape shared by store and callers.
//! - Validate user-supplied descriptions before persistence.
//!
//! # Invariants
//! - `id` is assigned by the store, monotonic, and never reused.
//! - `description` is non-empty after trimming.
//! - `position` alone defines list order; `id` breaks ties ascending.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier assigned by the store on creation.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = i64;

/// Canonical todo record. This is also the only wire format in the system:
/// the persisted row crosses the storage boundary unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned row id. Immutable for the record's lifetime.
    pub id: TodoId,
    /// User-supplied task text. Mutable only by delete-and-recreate.
    pub description: String,
    /// Completion flag, toggled in place.
    pub completed: bool,
    /// Ordering key. Ascending sort, `id` ascending on equal keys. Values
    /// are never required to be contiguous; only relative order matters.
    pub position: i64,
}

/// Validation failures for user-supplied todo fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Description is empty or whitespace-only.
    EmptyDescription,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "todo description must not be blank"),
        }
    }
}

impl Error for TodoValidationError {}

/// Checks a description before it reaches the store.
///
/// # Errors
/// - `EmptyDescription` when the text is empty after trimming.
pub fn validate_description(description: &str) -> Result<(), TodoValidationError> {
    if description.trim().is_empty() {
        return Err(TodoValidationError::EmptyDescription);
    }
    Ok(())
}
