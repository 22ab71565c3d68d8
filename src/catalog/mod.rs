//! Creature catalog: records, storage, search and lazy import

pub mod import;
pub mod query;
pub mod record;
pub mod service;
pub mod sqlite;
pub mod store;

pub use import::{import_range, ImportReport};
pub use query::{paginate, CatalogQuery, Page};
pub use record::{BaseStats, Pokemon};
pub use service::Catalog;
pub use sqlite::SqliteStore;
pub use store::{CatalogStore, MemoryStore};
