//! Todo store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and ordering APIs over the `todos` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `add` validates the description before any SQL mutation.
//! - `list` always returns rows ordered `position ASC, id ASC`.
//! - `toggle` is a single atomic UPDATE; there is no read-then-write
//!   window that could lose a concurrent update on the same row.
//! - The MAX-then-INSERT pair in `add` is deliberately not wrapped in a
//!   transaction: two concurrent adds can read the same maximum and
//!   collide on position. Accepted for the single-user scope; the `id`
//!   tie-break keeps the listing deterministic regardless.

use crate::db::DbError;
use crate::model::todo::{validate_description, Todo, TodoId, TodoValidationError};
use crate::position::{next_append_position, POSITION_STEP};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const TODO_SELECT_SQL: &str = "SELECT id, description, completed, position FROM todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for todo persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// User input rejected before persistence.
    Validation(TodoValidationError),
    /// Storage could not be reached or the statement failed. Propagated
    /// uncaught; retries belong to the caller, not the core.
    Db(DbError),
    /// Persisted state failed to parse on a read path.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted todo data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TodoValidationError> for RepoError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// One row for the bulk seed path. Test harness input, not user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedTodo {
    pub description: String,
    pub completed: bool,
}

impl SeedTodo {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    pub fn completed(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: true,
        }
    }
}

/// Store contract for todo persistence and ordering.
///
/// Mutations that target a vanished id return `Ok(false)` rather than an
/// error: a concurrent delete leaves the same end state either way.
pub trait TodoRepository {
    /// Creates a todo at the end of the list and returns the stored row.
    fn add(&self, description: &str) -> RepoResult<Todo>;
    /// Hard-deletes one row. `false` when the id was already gone.
    fn remove(&self, id: TodoId) -> RepoResult<bool>;
    /// Flips `completed` in a single atomic UPDATE. `false` on absent id.
    fn toggle(&self, id: TodoId) -> RepoResult<bool>;
    /// Overwrites `position` only. `false` on absent id.
    fn set_position(&self, id: TodoId, position: i64) -> RepoResult<bool>;
    /// Reads one row by id.
    fn get(&self, id: TodoId) -> RepoResult<Option<Todo>>;
    /// Returns a fresh snapshot of all rows in list order.
    fn list(&self) -> RepoResult<Vec<Todo>>;
    /// Returns the largest stored position, or `None` on an empty table.
    fn max_position(&self) -> RepoResult<Option<i64>>;
    /// Deletes every row. Test harness API; returns the rows removed.
    fn clear(&self) -> RepoResult<usize>;
    /// Bulk-inserts rows with explicit completed flags, assigning
    /// positions in input order (`(index + 1) * POSITION_STEP`) instead of
    /// going through the allocator. Test harness API.
    fn seed_many(&self, seeds: &[SeedTodo]) -> RepoResult<Vec<Todo>>;
}

/// SQLite-backed todo repository.
pub struct SqliteTodoRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTodoRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TodoRepository for SqliteTodoRepository<'_> {
    fn add(&self, description: &str) -> RepoResult<Todo> {
        validate_description(description)?;

        let position = next_append_position(self.max_position()?);
        self.conn.execute(
            "INSERT INTO todos (description, completed, position) VALUES (?1, 0, ?2);",
            params![description, position],
        )?;

        Ok(Todo {
            id: self.conn.last_insert_rowid(),
            description: description.to_string(),
            completed: false,
            position,
        })
    }

    fn remove(&self, id: TodoId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1;", params![id])?;
        Ok(changed > 0)
    }

    fn toggle(&self, id: TodoId) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE todos SET completed = NOT completed WHERE id = ?1;",
            params![id],
        )?;
        Ok(changed > 0)
    }

    fn set_position(&self, id: TodoId, position: i64) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE todos SET position = ?1 WHERE id = ?2;",
            params![position, id],
        )?;
        Ok(changed > 0)
    }

    fn get(&self, id: TodoId) -> RepoResult<Option<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_todo_row(row)?));
        }
        Ok(None)
    }

    fn list(&self) -> RepoResult<Vec<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TODO_SELECT_SQL} ORDER BY position ASC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut todos = Vec::new();

        while let Some(row) = rows.next()? {
            todos.push(parse_todo_row(row)?);
        }

        Ok(todos)
    }

    fn max_position(&self) -> RepoResult<Option<i64>> {
        let max = self
            .conn
            .query_row("SELECT MAX(position) FROM todos;", [], |row| {
                row.get::<_, Option<i64>>(0)
            })?;
        Ok(max)
    }

    fn clear(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM todos;", [])?;
        Ok(removed)
    }

    fn seed_many(&self, seeds: &[SeedTodo]) -> RepoResult<Vec<Todo>> {
        for seed in seeds {
            validate_description(&seed.description)?;
        }

        let mut seeded = Vec::with_capacity(seeds.len());
        for (index, seed) in seeds.iter().enumerate() {
            let position = (index as i64 + 1) * POSITION_STEP;
            self.conn.execute(
                "INSERT INTO todos (description, completed, position) VALUES (?1, ?2, ?3);",
                params![seed.description, bool_to_int(seed.completed), position],
            )?;
            seeded.push(Todo {
                id: self.conn.last_insert_rowid(),
                description: seed.description.clone(),
                completed: seed.completed,
                position,
            });
        }

        Ok(seeded)
    }
}

fn parse_todo_row(row: &Row<'_>) -> RepoResult<Todo> {
    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in todos.completed"
            )));
        }
    };

    Ok(Todo {
        id: row.get("id")?,
        description: row.get("description")?,
        completed,
        position: row.get("position")?,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
