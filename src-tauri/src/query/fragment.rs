//! A single selectable piece of query text.

use serde::{Deserialize, Serialize};

/// One snippet of search-language text plus an optional human label.
///
/// The snippet doubles as the fragment's identity inside its category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub id: String,
    #[serde(default)]
    pub label: Option<String>,
}

impl Fragment {
    pub fn new(id: impl Into<String>, label: Option<&str>) -> Self {
        Self {
            id: id.into(),
            label: label.map(str::to_string),
        }
    }

    pub fn labeled(id: impl Into<String>, label: &str) -> Self {
        Self::new(id, Some(label))
    }

    pub fn unlabeled(id: impl Into<String>) -> Self {
        Self::new(id, None)
    }
}
