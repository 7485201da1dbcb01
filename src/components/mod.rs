//! UI Components
//!
//! Leptos components for the todo page.

mod add_todo_form;
mod search_box;
mod todo_item;
mod todo_list;
mod top_bar;

pub use add_todo_form::AddTodoForm;
pub use search_box::SearchBox;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use top_bar::TopBar;
