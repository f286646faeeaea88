use crate::query::{Category, CategoryView, QueryBuilderState, SelectionChange, SelectionListener};
use std::sync::{Mutex, MutexGuard};
use tauri::{command, AppHandle, Emitter, State};
use tracing::{debug, info, warn};

pub const SELECTION_CHANGED: &str = "selection-changed";

fn lock(state: &Mutex<QueryBuilderState>) -> Result<MutexGuard<'_, QueryBuilderState>, String> {
    state
        .lock()
        .map_err(|e| format!("Query state unavailable: {e}"))
}

/* ---------- 1.  LISTS ---------- */

#[command]
pub fn catalog_view(state: State<'_, Mutex<QueryBuilderState>>) -> Result<Vec<CategoryView>, String> {
    Ok(lock(&state)?.views())
}

#[command]
pub fn toggle_selection(
    category: Category,
    id: String,
    state: State<'_, Mutex<QueryBuilderState>>,
) -> Result<Vec<CategoryView>, String> {
    toggle(&state, category, &id)
}

#[command]
pub fn clear_all(state: State<'_, Mutex<QueryBuilderState>>) -> Result<Vec<CategoryView>, String> {
    clear(&state)
}

/* ---------- 2.  OUTPUT ---------- */

// The web view puts both strings on the clipboard.

#[command]
pub fn build_query_string(state: State<'_, Mutex<QueryBuilderState>>) -> Result<String, String> {
    let query = lock(&state)?.build_query_string();
    info!("Query built:\n{}", query);
    Ok(query)
}

#[command]
pub fn build_label_string(state: State<'_, Mutex<QueryBuilderState>>) -> Result<String, String> {
    let label = lock(&state)?.build_label_string();
    info!(label = %label, "Label built");
    Ok(label)
}

fn toggle(
    state: &Mutex<QueryBuilderState>,
    category: Category,
    id: &str,
) -> Result<Vec<CategoryView>, String> {
    let mut guard = lock(state)?;
    if !guard.toggle_selection(category, id) {
        debug!(%category, "Toggle ignored");
    }
    Ok(guard.views())
}

fn clear(state: &Mutex<QueryBuilderState>) -> Result<Vec<CategoryView>, String> {
    let mut guard = lock(state)?;
    guard.clear_all();
    Ok(guard.views())
}

/* ---------- 3.  NOTIFICATIONS ---------- */

/// Forwards every selection change to the web view as a `selection-changed` event.
pub struct WebviewNotifier {
    app: AppHandle,
}

impl WebviewNotifier {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl SelectionListener for WebviewNotifier {
    fn on_selection_changed(&self, change: &SelectionChange) {
        if let Err(e) = self.app.emit(SELECTION_CHANGED, change) {
            warn!("Failed to emit {}: {}", SELECTION_CHANGED, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Catalog;

    fn shared() -> Mutex<QueryBuilderState> {
        Mutex::new(QueryBuilderState::new(Catalog::builtin().unwrap()))
    }

    #[test]
    fn toggle_returns_updated_views() {
        let state = shared();
        let id = lock(&state).unwrap().fragments(Category::TimeFrame)[0].id.clone();

        let views = toggle(&state, Category::TimeFrame, &id).unwrap();
        assert!(views[0].fragments[0].selected);

        let views = toggle(&state, Category::TimeFrame, &id).unwrap();
        assert!(!views[0].fragments[0].selected);
    }

    #[test]
    fn toggle_of_unknown_id_is_not_an_error() {
        let state = shared();
        let views = toggle(&state, Category::Eval, "| eval nope").unwrap();
        assert!(views.iter().all(|v| v.fragments.iter().all(|f| !f.selected)));
    }

    #[test]
    fn clear_unselects_every_row() {
        let state = shared();
        let id = lock(&state).unwrap().fragments(Category::Presentation)[2].id.clone();
        toggle(&state, Category::Presentation, &id).unwrap();

        let views = clear(&state).unwrap();
        assert!(views.iter().all(|v| v.fragments.iter().all(|f| !f.selected)));
        assert_eq!(lock(&state).unwrap().build_query_string(), r#"index="cashflow""#);
    }
}
