//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the narrow entry points external collaborators call: add,
//!   remove, toggle, list, reorder, plus the test-harness seed APIs.
//! - Notify the presentation layer after every successful mutation so it
//!   can drop its cached view and re-render from a fresh `list()`.
//!
//! # Invariants
//! - Service APIs never bypass repository validation or the ordering
//!   contract.
//! - The change listener fires only after a write actually changed a row;
//!   no-op outcomes stay silent.

use crate::model::todo::{Todo, TodoId};
use crate::reorder::{plan_move, MovePlan};
use crate::repo::todo_repo::{RepoResult, SeedTodo, TodoRepository};
use log::info;

/// Callback the presentation layer registers to invalidate its cached
/// view after a successful write.
pub type ChangeListener = Box<dyn Fn()>;

/// Outcome of a reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// The moving id vanished before or during the move. Nothing written.
    NotFound,
    /// The target slot equals the current slot. Nothing written.
    NoOp,
    /// The moved row now carries `new_position`; no other row changed.
    Moved { new_position: i64 },
}

/// Use-case facade over a todo repository.
pub struct TodoService<R: TodoRepository> {
    repo: R,
    on_change: Option<ChangeListener>,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            on_change: None,
        }
    }

    /// Registers the callback fired after every successful mutation.
    pub fn set_change_listener(&mut self, listener: ChangeListener) {
        self.on_change = Some(listener);
    }

    /// Creates a todo at the end of the list.
    ///
    /// # Errors
    /// - `RepoError::Validation` on a blank description.
    pub fn add(&self, description: &str) -> RepoResult<Todo> {
        let todo = self.repo.add(description)?;
        info!(
            "event=todo_add module=service status=ok id={} position={}",
            todo.id, todo.position
        );
        self.notify();
        Ok(todo)
    }

    /// Hard-deletes a todo. Returns `false` when the id was already gone;
    /// at-most-once delete semantics, never an error.
    pub fn remove(&self, id: TodoId) -> RepoResult<bool> {
        let removed = self.repo.remove(id)?;
        info!(
            "event=todo_remove module=service status=ok id={id} removed={removed}"
        );
        if removed {
            self.notify();
        }
        Ok(removed)
    }

    /// Flips a todo's completion flag. Returns `false` when the id has
    /// vanished; the end state (absence) matches a concurrent delete, so
    /// this is a no-op rather than an error.
    pub fn toggle(&self, id: TodoId) -> RepoResult<bool> {
        let toggled = self.repo.toggle(id)?;
        info!(
            "event=todo_toggle module=service status=ok id={id} toggled={toggled}"
        );
        if toggled {
            self.notify();
        }
        Ok(toggled)
    }

    /// Returns a fresh ordered snapshot of the whole list.
    pub fn list(&self) -> RepoResult<Vec<Todo>> {
        self.repo.list()
    }

    /// Reads one todo by id.
    pub fn get(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        self.repo.get(id)
    }

    /// Moves `moving_id` to `target_index` within the caller's ordered
    /// snapshot, persisting the single changed row.
    ///
    /// Planning is pure, so retrying the same call against the same
    /// snapshot computes the same position. A row that vanished between
    /// snapshot and write resolves to `NotFound`.
    pub fn reorder(
        &self,
        ordered: &[Todo],
        moving_id: TodoId,
        target_index: usize,
    ) -> RepoResult<ReorderOutcome> {
        let outcome = match plan_move(ordered, moving_id, target_index) {
            MovePlan::NotFound => ReorderOutcome::NotFound,
            MovePlan::NoOp => ReorderOutcome::NoOp,
            MovePlan::Apply { new_position } => {
                if self.repo.set_position(moving_id, new_position)? {
                    ReorderOutcome::Moved { new_position }
                } else {
                    ReorderOutcome::NotFound
                }
            }
        };

        info!(
            "event=todo_reorder module=service status=ok id={moving_id} target_index={target_index} outcome={outcome:?}"
        );
        if let ReorderOutcome::Moved { .. } = outcome {
            self.notify();
        }
        Ok(outcome)
    }

    /// Deletes every todo. Test harness API.
    pub fn clear(&self) -> RepoResult<usize> {
        let removed = self.repo.clear()?;
        if removed > 0 {
            self.notify();
        }
        Ok(removed)
    }

    /// Bulk-inserts todos with explicit completed flags and input-order
    /// positions. Test harness API.
    pub fn seed_many(&self, seeds: &[SeedTodo]) -> RepoResult<Vec<Todo>> {
        let seeded = self.repo.seed_many(seeds)?;
        if !seeded.is_empty() {
            self.notify();
        }
        Ok(seeded)
    }

    fn notify(&self) {
        if let Some(listener) = &self.on_change {
            listener();
        }
    }
}
