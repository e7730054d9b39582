//! Snapshot transformations over the shared todo list.
//!
//! Both functions return a fresh `Vec`; the input slice is never touched.

use crate::types::Todo;

/// Copy of `todos` with the `completed` flag of `id` inverted.
pub fn toggle_completed(todos: &[Todo], id: u64) -> Vec<Todo> {
    todos
        .iter()
        .map(|todo| {
            if todo.id == id {
                Todo {
                    completed: !todo.completed,
                    ..todo.clone()
                }
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Copy of `todos` without the item `id`, order preserved.
pub fn delete_todo(todos: &[Todo], id: u64) -> Vec<Todo> {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}
