use leptos::prelude::*;
use records_client::{Collection, Person};

/// One `<p>` per person, rebuilt in full on every change
#[component]
pub fn PersonList(people: ReadSignal<Collection<Person>>) -> impl IntoView {
    view! {
        <div class="person-list">
            {move || {
                people
                    .with(Collection::rows)
                    .into_iter()
                    .map(|row| view! { <p class="person-row">{row}</p> })
                    .collect_view()
            }}
        </div>
    }
}
