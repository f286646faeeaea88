//! Query assembly: five fixed fragment lists, a selection per list,
//! and the query and label strings built from what is selected.

pub mod catalog;
pub mod category;
pub mod fragment;
pub mod observer;
pub mod state;

pub use catalog::{Catalog, CatalogError, CatalogResult};
pub use category::Category;
pub use fragment::Fragment;
pub use observer::{SelectionChange, SelectionListener};
pub use state::{CategoryView, FragmentView, QueryBuilderState};
