//! List Counters

use crate::todo::Todo;

/// Counts shown in the list footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoStats {
    pub total: usize,
    pub done: usize,
    pub visible: usize,
}

impl TodoStats {
    pub fn collect(all: &[Todo], visible: &[Todo]) -> Self {
        Self {
            total: all.len(),
            done: all.iter().filter(|todo| todo.is_done).count(),
            visible: visible.len(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.visible != self.total
    }
}
