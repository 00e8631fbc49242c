use std::sync::Arc;

use storefront_core::{DomainResult, ProductId};
use storefront_products::{NewProduct, Product, ProductPatch, ProductQuery};

/// Owner of the product collection and its CRUD operations.
///
/// Implementations must:
/// - preserve insertion order for listings that do not request a sort
/// - assign ids on create (unique among live records) and never change them
/// - leave the collection untouched when an operation returns an error
pub trait CatalogStore: Send + Sync {
    /// Filtered (and optionally sorted) snapshot. Never fails; no match is an empty list.
    fn list(&self, query: &ProductQuery) -> Vec<Product>;

    fn get(&self, id: &ProductId) -> DomainResult<Product>;

    /// First product (insertion order) with exactly this slug.
    fn find_by_slug(&self, slug: &str) -> DomainResult<Product>;

    /// Append a new product and return it.
    fn create(&self, input: NewProduct) -> Product;

    /// Overwrite the fields present in `patch` and return the stored result.
    fn update(&self, id: &ProductId, patch: &ProductPatch) -> DomainResult<Product>;

    /// Remove exactly one product.
    fn delete(&self, id: &ProductId) -> DomainResult<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn list(&self, query: &ProductQuery) -> Vec<Product> {
        (**self).list(query)
    }

    fn get(&self, id: &ProductId) -> DomainResult<Product> {
        (**self).get(id)
    }

    fn find_by_slug(&self, slug: &str) -> DomainResult<Product> {
        (**self).find_by_slug(slug)
    }

    fn create(&self, input: NewProduct) -> Product {
        (**self).create(input)
    }

    fn update(&self, id: &ProductId, patch: &ProductPatch) -> DomainResult<Product> {
        (**self).update(id, patch)
    }

    fn delete(&self, id: &ProductId) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
