use std::sync::Arc;

use storefront_infra::{CatalogStore, InMemoryCatalogStore};

use crate::config::ApiConfig;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<dyn CatalogStore>,
    config: ApiConfig,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogStore>, config: ApiConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &dyn CatalogStore {
        self.catalog.as_ref()
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Default wiring: in-memory catalog loaded with the seed set.
pub fn build_services(config: ApiConfig) -> AppServices {
    let catalog = Arc::new(InMemoryCatalogStore::seeded());
    tracing::info!(products = catalog.len(), "catalog seeded");
    AppServices::new(catalog, config)
}
