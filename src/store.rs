//! Task Manager State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use records_client::{Collection, NewTodo, Todo};

/// Task manager state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Todos from the last accepted refresh
    pub todos: Collection<Todo>,
    /// Pending title input
    pub title: String,
    /// Pending description input
    pub description: String,
}

impl TodoState {
    /// Draft built from the pending inputs, as typed
    pub fn draft(&self) -> NewTodo {
        NewTodo::new(self.title.clone(), self.description.clone())
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

/// Read the pending inputs without subscribing
pub fn pending_draft(store: &TodoStore) -> NewTodo {
    store.with_untracked(TodoState::draft)
}
