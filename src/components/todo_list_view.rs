//! Todo List View Component

use leptos::prelude::*;
use records_client::Todo;

/// Rows are keyed by nothing: a new list always replaces the old rows
#[component]
pub fn TodoListView(#[prop(into)] todos: Signal<Vec<Todo>>) -> impl IntoView {
    view! {
        <ul class="todo-list">
            {move || {
                todos
                    .get()
                    .into_iter()
                    .map(|todo| view! { <TodoRow todo=todo /> })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
fn TodoRow(todo: Todo) -> impl IntoView {
    view! {
        <li class="todo-item">
            <span class="todo-item-title">{todo.title}</span>
            <span class="todo-item-description">{todo.description}</span>
        </li>
    }
}
