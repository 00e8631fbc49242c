//! Infrastructure layer: storage adapters behind domain-facing traits.

pub mod catalog;

pub use catalog::{CatalogStore, InMemoryCatalogStore};
