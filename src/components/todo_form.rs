//! Todo Form Component
//!
//! Title/description inputs and the "Add Task" button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use records_client::{submit_then_refresh, RefreshGuard, TodoEndpoint};

use crate::store::{pending_draft, use_todo_store, TodoStateStoreFields};

/// Form for posting a new todo
///
/// The submission runs in the background; inputs are left as typed and the
/// list only changes once the refresh after an accepted submit lands.
#[component]
pub fn TodoForm(endpoint: Option<TodoEndpoint>) -> impl IntoView {
    let guard = use_context::<RefreshGuard>().expect("RefreshGuard should be provided");
    let store = use_todo_store();

    let add_todo = move |_| {
        let Some(endpoint) = endpoint.clone() else {
            log::warn!("[TodoForm] no todo endpoint, dropping submission");
            return;
        };
        let draft = pending_draft(&store);
        let guard = guard.clone();

        spawn_local(async move {
            match submit_then_refresh(&endpoint, &endpoint, &guard, &draft).await {
                Ok(submitted) => {
                    let outcome = store
                        .todos()
                        .try_update(|todos| todos.apply(&guard, submitted.refresh));
                    log::info!("[TodoForm] created {}, refresh: {:?}", submitted.created, outcome);
                }
                Err(e) => log::warn!("[TodoForm] submit failed: {e}"),
            }
        });
    };

    view! {
        <div class="todo-form">
            <input
                class="todo-input title-input"
                type="text"
                placeholder="Title"
                prop:value=move || store.title().get()
                on:input=move |ev| *store.title().write() = event_target_value(&ev)
            />
            <input
                class="todo-input description-input"
                type="text"
                placeholder="Description"
                prop:value=move || store.description().get()
                on:input=move |ev| *store.description().write() = event_target_value(&ev)
            />
            <button type="button" class="add-task-btn" on:click=add_todo>
                "Add Task"
            </button>
        </div>
    }
}
