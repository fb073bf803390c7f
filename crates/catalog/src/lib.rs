//! In-memory book catalog.
//!
//! This crate owns the data side of the browser: the immutable source list of
//! [`BookRecord`](models::BookRecord)s, the author and genre lookup tables,
//! and the [`filter`] that maps [`FilterCriteria`](models::FilterCriteria) to
//! an ordered result list.
//!
//! Everything is loaded once, up front, via [`CatalogStore::from_json`],
//! [`CatalogStore::from_path`] or one of the embedded [`CatalogStore::builtin`]
//! documents, and is never mutated afterwards.

mod assets;
pub mod error;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod filter;
mod load;
pub mod models;
mod store;

pub use crate::assets::Builtins;
pub use crate::store::CatalogStore;

/// Name of the catalog used when none is configured.
pub const DEFAULT_BUILTIN: &str = "catalog.json";
