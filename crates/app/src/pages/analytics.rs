//! Analytics Page

use std::sync::Arc;

use prodsnap::{
    analytics::{CatalogSummary, Lineage, contributors, lineage},
    products::Product,
};

use crate::{
    api::ProductsApi,
    pages::{MountGuard, fetch_products, placeholder::Placeholder},
};

/// `/analytics`: version lineage across the catalog.
///
/// Shows the coming-soon placeholder unless the view is enabled.
pub struct AnalyticsPage {
    api: Arc<dyn ProductsApi>,
    guard: MountGuard,
    enabled: bool,
    products: Vec<Product>,
}

impl std::fmt::Debug for AnalyticsPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsPage")
            .field("enabled", &self.enabled)
            .field("products", &self.products.len())
            .finish_non_exhaustive()
    }
}

impl AnalyticsPage {
    /// Mount the page.
    #[must_use]
    pub fn new(api: Arc<dyn ProductsApi>, guard: MountGuard, enabled: bool) -> Self {
        Self {
            api,
            guard,
            enabled,
            products: Vec::new(),
        }
    }

    /// Fetch the product list. Does nothing while disabled.
    pub async fn load(&mut self) {
        if !self.enabled {
            return;
        }

        let products = fetch_products(self.api.as_ref()).await;

        if let Some(products) = self.guard.admit(products) {
            self.products = products;
        }
    }

    /// Placeholder to show instead, when disabled.
    #[must_use]
    pub fn placeholder(&self) -> Option<Placeholder> {
        (!self.enabled).then_some(Placeholder::ANALYTICS)
    }

    /// Catalog counters.
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::of(&self.products)
    }

    /// Per-product lineage.
    #[must_use]
    pub fn lineage(&self) -> Vec<Lineage<'_>> {
        lineage(&self.products)
    }

    /// Version authors, most active first.
    #[must_use]
    pub fn contributors(&self) -> Vec<(&str, usize)> {
        contributors(&self.products)
    }
}
