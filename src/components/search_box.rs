//! Search Box Component
//!
//! Live search input. Every keystroke writes the query; no debounce.

use leptos::prelude::*;

use crate::store::{store_set_query, use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="field is-fullwidth">
            <div class="control">
                <input
                    class="input is-large is-rounded"
                    type="text"
                    placeholder="Search for todos"
                    prop:value=move || store.query().get()
                    on:input=move |ev| store_set_query(&store, event_target_value(&ev))
                />
            </div>
        </div>
    }
}
