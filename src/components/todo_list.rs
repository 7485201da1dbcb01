//! Todo List Component
//!
//! Renders the searched view in collection order.

use leptos::prelude::*;
use todo_state::TodoStats;

use crate::components::TodoItem;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let stats = move || {
        let visible = ctx.visible_todos.get();
        let all = store.todos().read();
        TodoStats::collect(&all, &visible)
    };

    view! {
        <h2 class="subtitle is-3">"Your Todos"</h2>
        <div class="list is-full is-hoverable">
            <div class="list-item" style="cursor: pointer;">
                <For
                    each=move || ctx.visible_todos.get()
                    // Include the done flag so a toggled row is rebuilt
                    key=|todo| (todo.key(), todo.is_done)
                    children=move |todo| view! { <TodoItem todo=todo /> }
                />
            </div>
        </div>
        <p class="item-count">
            {move || {
                let stats = stats();
                if stats.is_filtered() {
                    format!("{} of {} todos shown, {} done", stats.visible, stats.total, stats.done)
                } else {
                    format!("{} todos, {} done", stats.total, stats.done)
                }
            }}
        </p>
    }
}
