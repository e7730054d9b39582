//! Owner of the shared todo list.
//!
//! The view never holds the list. It receives a read-only snapshot and
//! sends replacements through `SetTodos`, which is the only write path.

use tracing::debug;

use crate::types::Todo;

/// Accepts a full replacement of the shared list.
pub trait SetTodos {
    fn set_todos(&mut self, todos: Vec<Todo>);
}

impl<F> SetTodos for F
where
    F: FnMut(Vec<Todo>),
{
    fn set_todos(&mut self, todos: Vec<Todo>) {
        self(todos)
    }
}

/// Ancestor-scope owner of the todo list.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    revision: u64,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self { todos, revision: 0 }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of replacements received so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl SetTodos for TodoStore {
    fn set_todos(&mut self, todos: Vec<Todo>) {
        self.revision += 1;
        debug!(len = todos.len(), revision = self.revision, "shared list replaced");
        self.todos = todos;
    }
}
