//! Endpoint wiring
//!
//! Turns configured endpoints into REST clients, resolving relative paths
//! against the page origin.

use records_client::{ClientConfig, PeopleEndpoint, RestEndpoint, TodoEndpoint};

fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

fn endpoint<R, D>(path: &str) -> Option<RestEndpoint<R, D>> {
    match ClientConfig::resolve(path, &page_origin()) {
        Ok(url) => {
            log::debug!("[api] using endpoint {url}");
            Some(RestEndpoint::new(url))
        }
        Err(e) => {
            log::error!("[api] {e}");
            None
        }
    }
}

pub fn people_endpoint(config: &ClientConfig) -> Option<PeopleEndpoint> {
    endpoint(&config.people_endpoint)
}

pub fn todo_endpoint(config: &ClientConfig) -> Option<TodoEndpoint> {
    endpoint(&config.todo_endpoint)
}
