use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};
use storefront_products::{NewProduct, Product, ProductPatch, ProductQuery, seed_products};

use super::r#trait::CatalogStore;

/// In-memory catalog.
///
/// Mutations hold the write lock for their whole read-modify-write sequence;
/// reads clone a snapshot under the read lock. Nothing is persisted: a new
/// store starts from whatever it is constructed with.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the fixed startup catalog.
    pub fn seeded() -> Self {
        Self::with_products(seed_products())
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    // No operation leaves a half-applied mutation behind, so a poisoned lock
    // still guards a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Next id: `len + 1`, bumped past any id still held by a live record.
    fn next_id(products: &[Product]) -> ProductId {
        let mut candidate = products.len() + 1;
        loop {
            let id = ProductId::from_sequence(candidate);
            if !products.iter().any(|p| p.id() == &id) {
                return id;
            }
            candidate += 1;
        }
    }

    fn position(products: &[Product], id: &ProductId) -> DomainResult<usize> {
        products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(DomainError::not_found)
    }
}

impl CatalogStore for InMemoryCatalogStore {
    fn list(&self, query: &ProductQuery) -> Vec<Product> {
        let products = self.read();
        query.apply(products.iter())
    }

    fn get(&self, id: &ProductId) -> DomainResult<Product> {
        let products = self.read();
        products
            .iter()
            .find(|p| p.id() == id)
            .cloned()
            .ok_or_else(DomainError::not_found)
    }

    fn find_by_slug(&self, slug: &str) -> DomainResult<Product> {
        let products = self.read();
        products
            .iter()
            .find(|p| p.slug().as_str() == slug)
            .cloned()
            .ok_or_else(DomainError::not_found)
    }

    fn create(&self, input: NewProduct) -> Product {
        let mut products = self.write();
        let id = Self::next_id(&products);
        let product = Product::create(id, input);
        products.push(product.clone());

        tracing::debug!(product_id = %product.id(), slug = %product.slug(), "product created");
        product
    }

    fn update(&self, id: &ProductId, patch: &ProductPatch) -> DomainResult<Product> {
        let mut products = self.write();
        let idx = Self::position(&products, id)?;
        let updated = products[idx].patched(patch)?;
        products[idx] = updated.clone();

        tracing::debug!(product_id = %id, "product updated");
        Ok(updated)
    }

    fn delete(&self, id: &ProductId) -> DomainResult<()> {
        let mut products = self.write();
        let idx = Self::position(&products, id)?;
        products.remove(idx);

        tracing::debug!(product_id = %id, "product deleted");
        Ok(())
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
