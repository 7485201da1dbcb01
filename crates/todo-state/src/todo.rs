//! Todo Entity
//!
//! A todo is identified by its lower-cased text; there is no separate id.

use serde::{Deserialize, Serialize};

/// Case-insensitive identity of a todo
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoKey(String);

impl TodoKey {
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TodoKey {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A text item with a completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub text: String,
    #[serde(default)]
    pub is_done: bool,
}

impl Todo {
    /// Create a new, not yet done todo
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_done: false,
        }
    }

    /// Create a todo that is already done (used for seed data)
    pub fn done(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_done: true,
        }
    }

    pub fn key(&self) -> TodoKey {
        TodoKey::new(&self.text)
    }

    /// Whether the lower-cased text contains the lower-cased query
    pub fn matches(&self, query: &str) -> bool {
        self.text.to_lowercase().contains(&query.to_lowercase())
    }
}
