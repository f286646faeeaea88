//! Selection state over the catalog and the two strings derived from it.

use super::catalog::Catalog;
use super::category::Category;
use super::fragment::Fragment;
use super::observer::{SelectionChange, SelectionListener};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// What the web view needs to draw one row.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FragmentView {
    pub id: String,
    pub label: Option<String>,
    pub selected: bool,
}

/// One list on screen.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    pub category: Category,
    pub title: String,
    pub fragments: Vec<FragmentView>,
}

pub struct QueryBuilderState {
    catalog: Catalog,
    selections: [HashSet<String>; 5],
    listeners: Vec<Box<dyn SelectionListener>>,
}

impl QueryBuilderState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selections: Default::default(),
            listeners: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn subscribe(&mut self, listener: Box<dyn SelectionListener>) {
        self.listeners.push(listener);
    }

    /// Flip `id` in or out of the category's selection.
    ///
    /// Ids the category does not list are ignored. Returns whether anything changed.
    pub fn toggle_selection(&mut self, category: Category, id: &str) -> bool {
        if !self.catalog.contains(category, id) {
            debug!(%category, id, "Ignoring toggle of unknown fragment");
            return false;
        }

        let set = &mut self.selections[category.slot()];
        let selected = if set.remove(id) {
            false
        } else {
            set.insert(id.to_string());
            true
        };

        self.notify(&SelectionChange::Toggled {
            category,
            id: id.to_string(),
            selected,
        });
        true
    }

    pub fn is_selected(&self, category: Category, id: &str) -> bool {
        self.selections[category.slot()].contains(id)
    }

    pub fn selection(&self, category: Category) -> &HashSet<String> {
        &self.selections[category.slot()]
    }

    pub fn fragments(&self, category: Category) -> &[Fragment] {
        self.catalog.fragments(category)
    }

    /// Selected fragments of one category, in catalog order.
    fn selected(&self, category: Category) -> impl Iterator<Item = &Fragment> + '_ {
        let set = &self.selections[category.slot()];
        self.catalog
            .fragments(category)
            .iter()
            .filter(move |fragment| set.contains(&fragment.id))
    }

    /// `index="..."` followed by every selected snippet, one per line.
    pub fn build_query_string(&self) -> String {
        let mut lines = vec![self.catalog.index_line()];
        lines.extend(
            Category::QUERY_ORDER
                .iter()
                .flat_map(|&category| self.selected(category))
                .map(|fragment| fragment.id.clone()),
        );
        lines.join("\n")
    }

    /// Labels of the selected fragments joined by spaces; unlabeled ones are skipped.
    pub fn build_label_string(&self) -> String {
        Category::LABEL_ORDER
            .iter()
            .flat_map(|&category| self.selected(category))
            .filter_map(|fragment| fragment.label.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn clear_all(&mut self) {
        for set in self.selections.iter_mut() {
            set.clear();
        }
        self.notify(&SelectionChange::Cleared);
    }

    pub fn views(&self) -> Vec<CategoryView> {
        Category::QUERY_ORDER
            .iter()
            .map(|&category| CategoryView {
                category,
                title: category.title().to_string(),
                fragments: self
                    .catalog
                    .fragments(category)
                    .iter()
                    .map(|fragment| FragmentView {
                        id: fragment.id.clone(),
                        label: fragment.label.clone(),
                        selected: self.is_selected(category, &fragment.id),
                    })
                    .collect(),
            })
            .collect()
    }

    fn notify(&self, change: &SelectionChange) {
        for listener in &self.listeners {
            listener.on_selection_changed(change);
        }
    }
}
