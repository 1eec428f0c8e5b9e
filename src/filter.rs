//! Todo Filtering
//!
//! Maps the active filter mode to the visible subsequence of todos.

use crate::models::{FilterMode, Todo};

/// Whether a todo is visible under `mode`
pub fn matches(todo: &Todo, mode: FilterMode) -> bool {
    match mode {
        FilterMode::All => true,
        FilterMode::Active => !todo.completed,
        FilterMode::Completed => todo.completed,
    }
}

/// Visible todos in their original order
pub fn filter_todos(todos: &[Todo], mode: FilterMode) -> Vec<Todo> {
    todos.iter().filter(|todo| matches(todo, mode)).cloned().collect()
}
