//! Collection Operations
//!
//! The collection is append-only: add pushes to the end, toggle flips a flag
//! in place. Order is never reshuffled.

use log::{debug, warn};

use crate::config::AddRules;
use crate::error::{TodoError, TodoResult};
use crate::todo::{Todo, TodoKey};

/// Append a new undone todo unless its key is already taken.
///
/// Returns the key of the appended todo. On rejection the collection is left
/// untouched.
pub fn add_todo(todos: &mut Vec<Todo>, text: &str, rules: &AddRules) -> TodoResult<TodoKey> {
    if !rules.allow_empty_text && text.trim().is_empty() {
        debug!("[ADD] Rejected empty text");
        return Err(TodoError::EmptyText);
    }

    let key = TodoKey::new(text);
    if todos.iter().any(|todo| todo.key() == key) {
        debug!("[ADD] Rejected duplicate: {}", text);
        return Err(TodoError::AlreadyExists(text.to_string()));
    }

    todos.push(Todo::new(text));
    debug!("[ADD] Added {:?}, {} todos", text, todos.len());
    Ok(key)
}

/// Flip the done flag of every todo whose key matches.
///
/// Returns how many entries were flipped; the add invariant keeps this at most 1.
pub fn toggle_todo(todos: &mut [Todo], key: &TodoKey) -> usize {
    let mut flipped = 0;
    for todo in todos.iter_mut().filter(|todo| todo.key() == *key) {
        todo.is_done = !todo.is_done;
        flipped += 1;
    }

    if flipped == 0 {
        warn!("[TOGGLE] No todo with key {:?}", key.as_str());
    } else {
        debug!("[TOGGLE] Toggled {:?}", key.as_str());
    }
    flipped
}
