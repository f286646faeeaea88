//! Start-up configuration, read from the environment and an optional `.env`.

use crate::query::{Catalog, CatalogResult};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{error, info};

pub const CATALOG_VAR: &str = "CASHFLOW_QUERY_CATALOG";
pub const LOG_VAR: &str = "CASHFLOW_QUERY_LOG";

const DEFAULT_LOG_FILTER: &str = "cashflow_query_lib=info,cashflow_query=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Replaces the compiled-in catalog when set.
    pub catalog_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var_os(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let catalog_path = lookup(CATALOG_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let log_filter = match lookup(LOG_VAR) {
            Some(value) => value
                .into_string()
                .map_err(|_| ConfigError::NotUnicode { var: LOG_VAR })?,
            None => DEFAULT_LOG_FILTER.to_string(),
        };

        Ok(Self {
            catalog_path,
            log_filter,
        })
    }

    /// The override catalog if one is configured and readable, otherwise the built-in one.
    pub fn load_catalog(&self) -> CatalogResult<Catalog> {
        if let Some(path) = &self.catalog_path {
            match Catalog::from_path(path) {
                Ok(catalog) => return Ok(catalog),
                Err(e) => error!("Falling back to built-in catalog: {}", e),
            }
        }
        let catalog = Catalog::builtin()?;
        info!(fragments = catalog.len(), "Using built-in catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn reads_catalog_path_and_filter() {
        let config = AppConfig::from_lookup(lookup(&[
            (CATALOG_VAR, "/tmp/fragments.toml"),
            (LOG_VAR, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/fragments.toml")));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn empty_catalog_path_is_unset() {
        let config = AppConfig::from_lookup(lookup(&[(CATALOG_VAR, "")])).unwrap();
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn unreadable_override_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            catalog_path: Some(dir.path().join("missing.toml")),
            ..AppConfig::default()
        };
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.index(), "cashflow");
        assert_eq!(catalog.len(), 13);
    }
}
