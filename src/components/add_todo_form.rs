//! Add Todo Form Component
//!
//! Text input that appends a todo on Enter. A duplicate marks the input
//! with `is-danger` until the user types again.

use leptos::prelude::*;
use todo_state::{TodoError, TodoKey, TodoResult};

use crate::context::use_app_context;
use crate::store::{store_add_todo, use_app_store};

const INPUT_CLASS: &str = "input is-large is-rounded";

/// Text and error cue of the add input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddInput {
    pub text: String,
    /// Last submit was a duplicate; cleared by the next edit
    pub already_exists: bool,
}

impl AddInput {
    /// The user typed in the field
    pub fn edit(&mut self, text: String) {
        self.text = text;
        self.already_exists = false;
    }

    /// Apply the outcome of submitting the current text
    pub fn submitted(&mut self, result: &TodoResult<TodoKey>) {
        match result {
            Ok(_) => self.text.clear(),
            Err(TodoError::AlreadyExists(_)) => {
                self.text.clear();
                self.already_exists = true;
            }
            Err(TodoError::EmptyText) => {}
        }
    }

    pub fn class(&self) -> String {
        if self.already_exists {
            format!("{} is-danger", INPUT_CLASS)
        } else {
            INPUT_CLASS.to_string()
        }
    }
}

#[component]
pub fn AddTodoForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (input, set_input) = signal(AddInput::default());

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let text = input.with(|input| input.text.clone());
        let result = store_add_todo(&store, &text, &ctx.rules);
        set_input.update(|input| input.submitted(&result));
    };

    view! {
        <h2 class="subtitle is-3">"Add Todo"</h2>
        <div class="field">
            <div class="control">
                <input
                    class=move || input.with(AddInput::class)
                    placeholder="Buy Bread, Buy Milk ..."
                    prop:value=move || input.with(|input| input.text.clone())
                    on:keydown=on_keydown
                    on:input=move |ev| set_input.update(|input| input.edit(event_target_value(&ev)))
                />
            </div>
        </div>
    }
}
