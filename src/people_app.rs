//! People App
//!
//! Fetches the people list once on mount and renders it.

use leptos::prelude::*;
use leptos::task::spawn_local;
use records_client::{fetch_latest, ClientConfig, Collection, Person, RefreshGuard};

use crate::api;
use crate::components::PersonList;

#[component]
pub fn PeopleApp() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    let endpoint = api::people_endpoint(&config);
    let guard = RefreshGuard::new();

    // State
    let (people, set_people) = signal(Collection::<Person>::new());

    // Load once on mount
    Effect::new(move |_| {
        let Some(endpoint) = endpoint.clone() else { return };
        let guard = guard.clone();
        spawn_local(async move {
            let refresh = fetch_latest(&endpoint, &guard).await;
            let outcome = set_people.try_update(|people| people.apply(&guard, refresh));
            log::debug!("[PeopleApp] initial load: {:?}", outcome);
        });
    });

    view! {
        <div class="people-app">
            <PersonList people=people />
        </div>
    }
}
