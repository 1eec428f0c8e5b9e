//! Todo Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::TodoError;
use crate::models::{FilterMode, PendingTodo, Todo};

/// Ids with an outstanding update or delete call.
///
/// Counted, so an id stays busy until every call on it has settled.
/// Advisory only: nothing stops a second call on a busy id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InFlight {
    counts: HashMap<u32, usize>,
}

impl InFlight {
    pub fn begin(&mut self, id: u32) {
        *self.counts.entry(id).or_insert(0) += 1;
    }

    pub fn settle(&mut self, id: u32) {
        if let Some(count) = self.counts.get_mut(&id) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&id);
            }
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.counts.contains_key(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct busy ids
    pub fn len(&self) -> usize {
        self.counts.len()
    }
}

/// Todo app state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Authoritative list, in server order
    pub todos: Vec<Todo>,
    /// Busy ids for the per-row overlay
    pub in_flight: InFlight,
    /// Creation waiting for the server
    pub pending: Option<PendingTodo>,
    /// Text of the new-todo field
    pub draft: String,
    /// New-todo field is disabled while a create is outstanding
    pub input_disabled: bool,
    pub filter: FilterMode,
    /// Message shown in the error banner
    pub error: Option<TodoError>,
    /// Bumped on every error change; auto-dismissal only clears its own error
    pub error_generation: u64,
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

/// Append a todo returned by the server
pub fn store_push_todo(store: &TodoStore, todo: Todo) {
    store.todos().write().push(todo);
}

/// Replace a todo in place by ID
pub fn store_replace_todo(store: &TodoStore, updated: Todo) {
    if let Some(todo) = store.todos().write().iter_mut().find(|todo| todo.id == updated.id) {
        *todo = updated;
    }
}

/// Remove a todo from the store by ID
pub fn store_remove_todo(store: &TodoStore, id: u32) {
    store.todos().write().retain(|todo| todo.id != id);
}

pub fn store_begin_op(store: &TodoStore, id: u32) {
    store.in_flight().write().begin(id);
}

pub fn store_settle_op(store: &TodoStore, id: u32) {
    store.in_flight().write().settle(id);
}

// ========================
// Derived Queries
// ========================

/// Current record for `id`, if it is still in the list
pub fn find_todo(todos: &[Todo], id: u32) -> Option<Todo> {
    todos.iter().find(|todo| todo.id == id).cloned()
}

pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

/// "1 item left" / "N items left"
pub fn items_left_label(todos: &[Todo]) -> String {
    let left = active_count(todos);
    format!("{} {} left", left, if left == 1 { "item" } else { "items" })
}

/// True when no todo is active; vacuously true for an empty list
pub fn all_completed(todos: &[Todo]) -> bool {
    todos.iter().all(|todo| todo.completed)
}

pub fn has_completed(todos: &[Todo]) -> bool {
    todos.iter().any(|todo| todo.completed)
}

pub fn completed_ids(todos: &[Todo]) -> Vec<u32> {
    todos.iter().filter(|todo| todo.completed).map(|todo| todo.id).collect()
}

/// Todos the toggle-all control flips: the active ones, or every todo
/// once all are completed
pub fn toggle_all_targets(todos: &[Todo]) -> Vec<Todo> {
    if all_completed(todos) {
        todos.to_vec()
    } else {
        todos.iter().filter(|todo| !todo.completed).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            user_id: 1,
            completed,
        }
    }

    #[test]
    fn test_items_left_pluralization() {
        assert_eq!(items_left_label(&[]), "0 items left");
        assert_eq!(items_left_label(&[make_todo(1, false)]), "1 item left");
        assert_eq!(
            items_left_label(&[make_todo(1, false), make_todo(2, true)]),
            "1 item left"
        );
        assert_eq!(
            items_left_label(&[make_todo(1, false), make_todo(2, false)]),
            "2 items left"
        );
        assert_eq!(items_left_label(&[make_todo(1, true)]), "0 items left");
    }

    #[test]
    fn test_find_todo_by_id() {
        let todos = vec![make_todo(1, false), make_todo(2, true)];
        assert_eq!(find_todo(&todos, 2), Some(make_todo(2, true)));
        assert_eq!(find_todo(&todos, 3), None);
    }

    #[test]
    fn test_all_completed() {
        assert!(all_completed(&[]));
        assert!(all_completed(&[make_todo(1, true), make_todo(2, true)]));
        assert!(!all_completed(&[make_todo(1, true), make_todo(2, false)]));
    }

    #[test]
    fn test_completed_ids_in_list_order() {
        let todos = vec![make_todo(4, true), make_todo(2, false), make_todo(9, true)];
        assert_eq!(completed_ids(&todos), vec![4, 9]);
        assert!(has_completed(&todos));
        assert!(!has_completed(&[make_todo(1, false)]));
    }

    #[test]
    fn test_toggle_all_targets() {
        let mixed = vec![make_todo(1, false), make_todo(2, true), make_todo(3, false)];
        let ids: Vec<u32> = toggle_all_targets(&mixed).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);

        let done = vec![make_todo(1, true), make_todo(2, true), make_todo(3, true)];
        assert_eq!(toggle_all_targets(&done).len(), 3);

        assert!(toggle_all_targets(&[]).is_empty());
    }

    #[test]
    fn test_in_flight_counts_overlapping_calls() {
        let mut in_flight = InFlight::default();
        in_flight.begin(5);
        in_flight.begin(5);
        in_flight.begin(6);
        assert_eq!(in_flight.len(), 2);

        in_flight.settle(5);
        assert!(in_flight.contains(5));
        in_flight.settle(5);
        assert!(!in_flight.contains(5));

        // Settling an unknown id is a no-op
        in_flight.settle(42);
        in_flight.settle(6);
        assert!(in_flight.is_empty());
    }

    #[test]
    fn test_store_helpers_by_id() {
        let store = Store::new(TodoState {
            todos: vec![make_todo(1, false), make_todo(2, false), make_todo(3, false)],
            ..Default::default()
        });

        store_replace_todo(&store, make_todo(2, true));
        store_remove_todo(&store, 1);
        store_push_todo(&store, make_todo(7, false));
        // Unknown ids leave the list alone
        store_replace_todo(&store, make_todo(99, true));
        store_remove_todo(&store, 99);

        let todos = store.todos().get_untracked();
        let ids: Vec<u32> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 7]);
        assert!(todos[0].completed);
    }
}
