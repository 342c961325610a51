//! CLI entry point for the todo list core.
//!
//! # Responsibility
//! - Exercise `todolist_core` end to end against a database file.
//! - Keep output deterministic for quick local sanity checks.

use std::env;
use std::process::ExitCode;

use todolist_core::db::open_db;
use todolist_core::{ReorderOutcome, SqliteTodoRepository, Todo, TodoService};

const USAGE: &str = "usage: todo <command>

commands:
  add <text>         create a todo at the end of the list
  list               print the ordered list
  toggle <id>        flip a todo's completion flag
  remove <id>        delete a todo
  move <id> <index>  move a todo to a zero-based list slot

The database file is taken from TODOLIST_DB (default: todolist.db).";

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let Some(command) = args.first() else {
        return Err(USAGE.to_string());
    };

    let db_path = env::var("TODOLIST_DB").unwrap_or_else(|_| "todolist.db".to_string());
    let conn = open_db(&db_path).map_err(|err| format!("cannot open `{db_path}`: {err}"))?;
    let service = TodoService::new(SqliteTodoRepository::new(&conn));

    match (command.as_str(), &args[1..]) {
        ("add", [text]) => {
            let todo = service.add(text).map_err(|err| err.to_string())?;
            println!("added #{}: {}", todo.id, todo.description);
            Ok(())
        }
        ("list", []) => {
            let todos = service.list().map_err(|err| err.to_string())?;
            if todos.is_empty() {
                println!("(no todos)");
            }
            for todo in &todos {
                println!("{}", render_line(todo));
            }
            Ok(())
        }
        ("toggle", [id]) => {
            let id = parse_id(id)?;
            if service.toggle(id).map_err(|err| err.to_string())? {
                println!("toggled #{id}");
            } else {
                println!("#{id} not found; nothing to toggle");
            }
            Ok(())
        }
        ("remove", [id]) => {
            let id = parse_id(id)?;
            if service.remove(id).map_err(|err| err.to_string())? {
                println!("removed #{id}");
            } else {
                println!("#{id} not found; nothing to remove");
            }
            Ok(())
        }
        ("move", [id, index]) => {
            let id = parse_id(id)?;
            let index: usize = index
                .parse()
                .map_err(|_| format!("invalid index `{index}`"))?;
            let snapshot = service.list().map_err(|err| err.to_string())?;
            match service
                .reorder(&snapshot, id, index)
                .map_err(|err| err.to_string())?
            {
                ReorderOutcome::Moved { new_position } => {
                    println!("moved #{id} to slot {index} (position {new_position})");
                }
                ReorderOutcome::NoOp => println!("#{id} is already at slot {index}"),
                ReorderOutcome::NotFound => println!("#{id} not found; nothing to move"),
            }
            Ok(())
        }
        _ => Err(USAGE.to_string()),
    }
}

fn parse_id(raw: &str) -> Result<i64, String> {
    raw.parse().map_err(|_| format!("invalid id `{raw}`"))
}

fn render_line(todo: &Todo) -> String {
    let marker = if todo.completed { "x" } else { " " };
    format!("[{marker}] #{} {}", todo.id, todo.description)
}
