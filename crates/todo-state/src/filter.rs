//! Derived View
//!
//! The searched todo list is never stored; it is recomputed from
//! (todos, query) on every read.

use std::borrow::Cow;

use crate::todo::Todo;

/// Filter todos by a case-insensitive substring query.
///
/// An empty query returns the collection itself, borrowed, in the same order.
/// Otherwise the matching subsequence is returned in original order.
pub fn filter_todos<'a>(todos: &'a [Todo], query: &str) -> Cow<'a, [Todo]> {
    if query.is_empty() {
        return Cow::Borrowed(todos);
    }

    todos
        .iter()
        .filter(|todo| todo.matches(query))
        .cloned()
        .collect::<Vec<_>>()
        .into()
}
