//! Catalog store boundary.
//!
//! This module defines the store abstraction that owns the authoritative list of
//! products, plus its in-memory implementation.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryCatalogStore;
pub use r#trait::CatalogStore;
