//! Records Frontend
//!
//! Two independent single-page apps over one client crate:
//! - people: read-only list fetched once on mount
//! - todo: task manager with an add form and triggered refreshes

mod api;
mod components;
mod context;
mod logger;
mod people_app;
mod store;
mod todo_app;

use leptos::prelude::*;

pub use people_app::PeopleApp;
pub use todo_app::TodoApp;

fn boot() {
    console_error_panic_hook::set_once();
    logger::init();
}

pub fn mount_people_app() {
    boot();
    mount_to_body(PeopleApp);
}

pub fn mount_todo_app() {
    boot();
    mount_to_body(TodoApp);
}
