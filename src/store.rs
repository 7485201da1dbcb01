//! Application State Store
//!
//! Uses Leptos reactive_stores so `todos` and `query` are independent,
//! individually tracked slices.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_state::{add_todo, filter_todos, toggle_todo, AddRules, Todo, TodoKey, TodoResult};

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All todos, in insertion order
    pub todos: Vec<Todo>,
    /// Current search filter ("" = no filter)
    pub query: String,
}

impl AppState {
    pub fn new(seed: Vec<Todo>) -> Self {
        Self {
            todos: seed,
            query: String::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a todo. The collection is only written (and subscribers notified)
/// when the add is accepted.
pub fn store_add_todo(store: &AppStore, text: &str, rules: &AddRules) -> TodoResult<TodoKey> {
    let mut todos = store.todos().get_untracked();
    let key = add_todo(&mut todos, text, rules)?;
    *store.todos().write() = todos;
    Ok(key)
}

/// Flip the done flag of the todo with this key
pub fn store_toggle_todo(store: &AppStore, key: &TodoKey) {
    toggle_todo(&mut store.todos().write(), key);
}

/// Replace the search query
pub fn store_set_query(store: &AppStore, query: String) {
    *store.query().write() = query;
}

/// Todos matching the current query, recomputed when either slice changes
pub fn store_visible_todos(store: AppStore) -> Memo<Vec<Todo>> {
    Memo::new(move |_| filter_todos(&store.todos().read(), &store.query().read()).into_owned())
}
