//! The fixed fragment lists, compiled in or read from a TOML file.

use super::category::Category;
use super::fragment::Fragment;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

const DEFAULT_CATALOG: &str = include_str!("./default_catalog.toml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Duplicate fragment in {category}: {id}")]
    DuplicateId { category: Category, id: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// On-disk layout. Every category table is optional.
#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default = "default_index")]
    index: String,
    #[serde(default)]
    time_frame: Vec<Fragment>,
    #[serde(default)]
    purpose: Vec<Fragment>,
    #[serde(default)]
    filter: Vec<Fragment>,
    #[serde(default)]
    eval: Vec<Fragment>,
    #[serde(default)]
    presentation: Vec<Fragment>,
}

fn default_index() -> String {
    "cashflow".to_string()
}

/// The five ordered fragment lists plus the search index they target.
///
/// Built once at start-up and never changed afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    index: String,
    lists: [Vec<Fragment>; 5],
}

impl Catalog {
    /// Build a catalog, rejecting a repeated id inside one category.
    /// The same id in two different categories is fine.
    pub fn new(index: impl Into<String>, entries: Vec<(Category, Vec<Fragment>)>) -> CatalogResult<Self> {
        let mut lists: [Vec<Fragment>; 5] = Default::default();
        for (category, fragments) in entries {
            lists[category.slot()].extend(fragments);
        }

        for category in Category::QUERY_ORDER {
            let mut seen = HashSet::new();
            for fragment in &lists[category.slot()] {
                if !seen.insert(fragment.id.as_str()) {
                    return Err(CatalogError::DuplicateId {
                        category,
                        id: fragment.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            index: index.into(),
            lists,
        })
    }

    /// The catalog shipped inside the binary.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_toml(DEFAULT_CATALOG)
    }

    pub fn from_toml(source: &str) -> CatalogResult<Self> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::new(
            file.index,
            vec![
                (Category::TimeFrame, file.time_frame),
                (Category::Purpose, file.purpose),
                (Category::Filter, file.filter),
                (Category::Eval, file.eval),
                (Category::Presentation, file.presentation),
            ],
        )
    }

    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        debug!(path = %path.display(), "Reading catalog");
        let source = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml(&source)?;
        info!(path = %path.display(), fragments = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// First line of every query, e.g. `index="cashflow"`.
    pub fn index_line(&self) -> String {
        format!("index=\"{}\"", self.index)
    }

    pub fn fragments(&self, category: Category) -> &[Fragment] {
        &self.lists[category.slot()]
    }

    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.fragments(category).iter().any(|f| f.id == id)
    }

    /// Total number of fragments across all categories.
    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
