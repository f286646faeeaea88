mod commands;
pub mod config;
pub mod logging;
pub mod query;

use crate::commands::*;
use crate::config::AppConfig;
use crate::query::QueryBuilderState;
use std::sync::Mutex;
use tauri::Manager;
use tracing::{info, warn};

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = match AppConfig::from_env() {
        Ok(config) => {
            logging::init_tracing(&config.log_filter);
            config
        }
        Err(e) => {
            let config = AppConfig::default();
            logging::init_tracing(&config.log_filter);
            warn!("Ignoring environment configuration: {}", e);
            config
        }
    };

    tauri::Builder::default()
        .setup(move |app| {
            let catalog = config.load_catalog()?;
            let mut state = QueryBuilderState::new(catalog);
            state.subscribe(Box::new(WebviewNotifier::new(app.handle().clone())));
            app.manage(Mutex::new(state));
            info!("Query builder ready");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            catalog_view,
            toggle_selection,
            clear_all,
            build_query_string,
            build_label_string
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
