//! Products domain module.
//!
//! This crate contains business rules for the product catalog, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;
pub mod query;
pub mod seed;

pub use product::{
    DEFAULT_CATEGORY, DEFAULT_DESCRIPTION, NewProduct, Product, ProductPatch, Slug,
};
pub use query::{ProductQuery, SortOrder};
pub use seed::seed_products;
