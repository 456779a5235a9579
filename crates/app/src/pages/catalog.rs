//! Catalog Page

use std::sync::Arc;

use prodsnap::{
    catalog::{CatalogQuery, EmptyState},
    products::Product,
};

use crate::{
    api::ProductsApi,
    pages::{MountGuard, fetch_products},
};

/// `/products`: searchable, sortable product list.
pub struct CatalogPage {
    api: Arc<dyn ProductsApi>,
    guard: MountGuard,
    products: Vec<Product>,
    loaded: bool,

    /// Search text and sort order
    pub query: CatalogQuery,
}

impl std::fmt::Debug for CatalogPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogPage")
            .field("products", &self.products.len())
            .field("loaded", &self.loaded)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl CatalogPage {
    /// Mount the page.
    #[must_use]
    pub fn new(api: Arc<dyn ProductsApi>, guard: MountGuard, query: CatalogQuery) -> Self {
        Self {
            api,
            guard,
            products: Vec::new(),
            loaded: false,
            query,
        }
    }

    /// Fetch the product list.
    pub async fn load(&mut self) {
        let products = fetch_products(self.api.as_ref()).await;

        if let Some(products) = self.guard.admit(products) {
            self.products = products;
            self.loaded = true;
        }
    }

    /// Whether a fetch has completed.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Products as fetched.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching the query, in query order.
    #[must_use]
    pub fn view(&self) -> Vec<&Product> {
        self.query.view(&self.products)
    }

    /// Message for an empty view.
    #[must_use]
    pub fn empty_state(&self) -> EmptyState {
        self.query.empty_state()
    }
}
