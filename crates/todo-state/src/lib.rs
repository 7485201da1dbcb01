//! Todo State
//!
//! Platform-independent rules behind the todo-search UI:
//! - todo: entity and its case-insensitive identity key
//! - filter: the derived, searched view of the collection
//! - list: add and toggle operations over the collection
//! - stats: counters shown under the list
//! - config: seed list and add rules

mod config;
mod error;
mod filter;
mod list;
mod stats;
mod todo;

#[cfg(test)]
mod tests;

pub use config::{AddRules, AppConfig};
pub use error::{ConfigError, TodoError, TodoResult};
pub use filter::filter_todos;
pub use list::{add_todo, toggle_todo};
pub use stats::TodoStats;
pub use todo::{Todo, TodoKey};
