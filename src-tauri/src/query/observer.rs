//! Pluggable selection-change listeners.

use super::category::Category;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionChange {
    Toggled {
        category: Category,
        id: String,
        selected: bool,
    },
    Cleared,
}

pub trait SelectionListener: Send + Sync {
    fn on_selection_changed(&self, change: &SelectionChange);
}

impl<F> SelectionListener for F
where
    F: Fn(&SelectionChange) + Send + Sync,
{
    fn on_selection_changed(&self, change: &SelectionChange) {
        self(change)
    }
}
