//! Todo Search Frontend App
//!
//! Shell: search bar on top, add form and todo list below.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_state::AppConfig;

use crate::components::{AddTodoForm, TodoList, TopBar};
use crate::context::AppContext;
use crate::store::{store_visible_todos, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let AppConfig { seed, rules, .. } = config;

    // State
    let store = Store::new(AppState::new(seed));
    provide_context(store);

    // Derived view
    let visible_todos = store_visible_todos(store);

    provide_context(AppContext::new(rules, visible_todos));

    Effect::new(move |_| {
        let shown = visible_todos.with(|todos| todos.len());
        log::debug!("[APP] Query {:?} shows {} todos", store.query().get_untracked(), shown);
    });

    view! {
        <TopBar />
        <section class="section">
            <div class="container">
                <div class="columns">
                    <div class="column">
                        <div class="columns is-multiline">
                            <div class="column is-full">
                                <AddTodoForm />
                            </div>
                            <div class="column is-full">
                                <TodoList />
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
