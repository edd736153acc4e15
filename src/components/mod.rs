//! UI Components
//!
//! Reusable Leptos components.

mod person_list;
mod todo_form;
mod todo_list_view;

pub use person_list::PersonList;
pub use todo_form::TodoForm;
pub use todo_list_view::TodoListView;
