//! Core domain logic for the todo list.
//! This crate is the single source of truth for ordering invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod position;
pub mod reorder;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoId, TodoValidationError};
pub use position::{between_position, next_append_position, POSITION_STEP};
pub use reorder::{plan_move, MovePlan};
pub use repo::todo_repo::{
    RepoError, RepoResult, SeedTodo, SqliteTodoRepository, TodoRepository,
};
pub use service::todo_service::{ReorderOutcome, TodoService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
