//! Task Manager App
//!
//! The list is fetched on mount, after each successful submission (see
//! `TodoForm`) and, when configured, on a fixed interval. Each fetch supersedes the ones
//! still in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use records_client::{fetch_latest, ClientConfig, RefreshGuard};

use crate::api;
use crate::components::{TodoForm, TodoListView};
use crate::context::RefreshContext;
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn TodoApp() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    let endpoint = api::todo_endpoint(&config);
    let guard = RefreshGuard::new();

    // State
    let store = Store::new(TodoState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let ctx = RefreshContext::new((reload_trigger, set_reload_trigger));

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);
    provide_context(guard.clone());

    // Load todos on mount and whenever a reload is requested
    let list_endpoint = endpoint.clone();
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let Some(endpoint) = list_endpoint.clone() else { return };
        let guard = guard.clone();
        spawn_local(async move {
            let refresh = fetch_latest(&endpoint, &guard).await;
            let outcome = store.todos().try_update(|todos| todos.apply(&guard, refresh));
            log::debug!("[TodoApp] refresh (trigger={}): {:?}", trigger, outcome);
        });
    });

    if let Some(period) = config.todo_refresh_interval() {
        match set_interval_with_handle(move || ctx.reload(), period) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("[TodoApp] refresh timer not started: {:?}", e),
        }
    }

    let todos = Signal::derive(move || store.todos().with(|todos| todos.records().to_vec()));

    view! {
        <div class="todo-app">
            <h1 class="todo-app-title">"Task Manager"</h1>
            <div class="todo-app-body">
                <h5>"Add your task"</h5>
                <TodoForm endpoint=endpoint />
                <h5>"Your Tasks"</h5>
                <TodoListView todos=todos />
            </div>
        </div>
    }
}
