//! The five fixed fragment groups and the orders they are read in.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TimeFrame,
    Purpose,
    Filter,
    Eval,
    Presentation,
}

impl Category {
    /// Display order, also the order categories feed the query string.
    pub const QUERY_ORDER: [Category; 5] = [
        Category::TimeFrame,
        Category::Purpose,
        Category::Filter,
        Category::Eval,
        Category::Presentation,
    ];

    /// Labels read as a sentence: "Spending in [category] by Cycle in the last 13 cycles".
    pub const LABEL_ORDER: [Category; 5] = [
        Category::Purpose,
        Category::Filter,
        Category::Presentation,
        Category::TimeFrame,
        Category::Eval,
    ];

    /// Position in the state's selection table.
    pub(crate) fn slot(self) -> usize {
        match self {
            Category::TimeFrame => 0,
            Category::Purpose => 1,
            Category::Filter => 2,
            Category::Eval => 3,
            Category::Presentation => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::TimeFrame => "Time frame",
            Category::Purpose => "Purpose",
            Category::Filter => "Filter",
            Category::Eval => "Evaluation",
            Category::Presentation => "Presentation",
        }
    }

    /// Key used in catalog files and over IPC.
    pub fn key(self) -> &'static str {
        match self {
            Category::TimeFrame => "time_frame",
            Category::Purpose => "purpose",
            Category::Filter => "filter",
            Category::Eval => "eval",
            Category::Presentation => "presentation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
