//! Application Context
//!
//! Shared values provided via Leptos Context API.

use leptos::prelude::*;
use todo_state::{AddRules, Todo};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Validation rules for adding todos
    pub rules: AddRules,
    /// Todos matching the current query, recomputed when todos or query change
    pub visible_todos: Memo<Vec<Todo>>,
}

impl AppContext {
    pub fn new(rules: AddRules, visible_todos: Memo<Vec<Todo>>) -> Self {
        Self { rules, visible_todos }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
