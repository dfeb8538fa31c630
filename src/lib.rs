pub mod catalog;
pub mod error;
pub mod models;
pub mod query;
pub mod services;

pub use catalog::{CatalogClient, CatalogConfig, CatalogHttpClient, NoopCatalogClient};
pub use error::CatalogError;
pub use query::{LessonQuery, SortOrder};
