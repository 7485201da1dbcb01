//! Todo Item Component
//!
//! One row; clicking anywhere on it toggles the todo.

use leptos::prelude::*;
use todo_state::Todo;

use crate::store::{store_toggle_todo, use_app_store};

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let store = use_app_store();
    let key = todo.key();
    let icon = if todo.is_done { "fas fa-check-square" } else { "far fa-square" };

    view! {
        <div role="button" class="columns" on:click=move |_| store_toggle_todo(&store, &key)>
            <div class="column">
                <div class="content is-large">{todo.text}</div>
            </div>
            <div class="column is-narrow">
                <div class="content is-large">
                    <span class="icon">
                        <i class=icon aria-hidden="true"></i>
                    </span>
                </div>
            </div>
        </div>
    }
}
