use todolist_core::db::open_db_in_memory;
use todolist_core::{
    RepoError, SqliteTodoRepository, TodoRepository, TodoService, TodoValidationError,
};

#[test]
fn add_on_empty_list_starts_at_base_position() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);

    let todo = repo.add("Buy milk").unwrap();
    assert_eq!(todo.position, 1000);
    assert!(!todo.completed);

    let listed = repo.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].description, "Buy milk");
    assert_eq!(listed[0].position, 1000);
    assert!(!listed[0].completed);
}

#[test]
fn add_appends_past_current_max_position() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);

    repo.add("first").unwrap();
    repo.add("second").unwrap();
    let third = repo.add("third").unwrap();

    assert_eq!(third.position, 3000);
    let listed = repo.list().unwrap();
    assert_eq!(listed.last().unwrap().id, third.id);
}

#[test]
fn add_rejects_blank_description() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);

    let err = repo.add("   ").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(TodoValidationError::EmptyDescription)
    ));
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn ids_are_monotonic_and_never_reused() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);

    let a = repo.add("a").unwrap();
    let b = repo.add("b").unwrap();
    assert!(b.id > a.id);

    repo.remove(b.id).unwrap();
    let c = repo.add("c").unwrap();
    assert!(c.id > b.id);
}

#[test]
fn toggle_twice_restores_original_state() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);

    let todo = repo.add("flip me").unwrap();

    assert!(repo.toggle(todo.id).unwrap());
    let flipped = repo.get(todo.id).unwrap().unwrap();
    assert!(flipped.completed);

    assert!(repo.toggle(todo.id).unwrap());
    let restored = repo.get(todo.id).unwrap().unwrap();
    assert_eq!(restored.completed, todo.completed);
    assert_eq!(restored.description, todo.description);
    assert_eq!(restored.position, todo.position);
}

#[test]
fn toggle_on_absent_id_is_a_no_op() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);

    assert!(!repo.toggle(999).unwrap());
}

#[test]
fn remove_deletes_the_row_permanently() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);

    let todo = repo.add("short lived").unwrap();
    assert!(repo.remove(todo.id).unwrap());
    assert!(repo.get(todo.id).unwrap().is_none());
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn remove_on_absent_id_leaves_list_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);

    repo.add("keep me").unwrap();
    assert!(!repo.remove(999).unwrap());
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn set_position_touches_only_the_ordering_key() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);

    let todo = repo.add("stay put").unwrap();
    repo.toggle(todo.id).unwrap();

    assert!(repo.set_position(todo.id, 42).unwrap());
    let updated = repo.get(todo.id).unwrap().unwrap();
    assert_eq!(updated.position, 42);
    assert_eq!(updated.description, "stay put");
    assert!(updated.completed);
}

#[test]
fn max_position_is_none_on_empty_table() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);

    assert_eq!(repo.max_position().unwrap(), None);
    repo.add("one").unwrap();
    assert_eq!(repo.max_position().unwrap(), Some(1000));
}

#[test]
fn persisted_record_shape_is_stable() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoRepository::new(&conn);

    let todo = repo.add("Buy milk").unwrap();
    let value = serde_json::to_value(&todo).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": todo.id,
            "description": "Buy milk",
            "completed": false,
            "position": 1000
        })
    );
}

#[test]
fn service_notifies_listener_on_mutations_only() {
    use std::cell::Cell;
    use std::rc::Rc;

    let conn = open_db_in_memory().unwrap();
    let mut service = TodoService::new(SqliteTodoRepository::new(&conn));

    let fired = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&fired);
    service.set_change_listener(Box::new(move || counter.set(counter.get() + 1)));

    let todo = service.add("watched").unwrap();
    assert_eq!(fired.get(), 1);

    service.list().unwrap();
    assert_eq!(fired.get(), 1);

    service.toggle(todo.id).unwrap();
    assert_eq!(fired.get(), 2);

    // No-op outcomes stay silent.
    service.remove(999).unwrap();
    assert_eq!(fired.get(), 2);

    service.remove(todo.id).unwrap();
    assert_eq!(fired.get(), 3);
}
