//! Dashboard Page

use std::sync::Arc;

use prodsnap::{
    analytics::{CatalogSummary, RECENT_PRODUCTS, recent_products},
    products::Product,
};

use crate::{
    api::ProductsApi,
    pages::{MountGuard, fetch_products},
};

/// `/`: catalog counters and the most recently updated products.
pub struct DashboardPage {
    api: Arc<dyn ProductsApi>,
    guard: MountGuard,
    products: Vec<Product>,
}

impl std::fmt::Debug for DashboardPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardPage")
            .field("products", &self.products.len())
            .finish_non_exhaustive()
    }
}

impl DashboardPage {
    /// Mount the page.
    #[must_use]
    pub fn new(api: Arc<dyn ProductsApi>, guard: MountGuard) -> Self {
        Self {
            api,
            guard,
            products: Vec::new(),
        }
    }

    /// Fetch the product list.
    pub async fn load(&mut self) {
        let products = fetch_products(self.api.as_ref()).await;

        if let Some(products) = self.guard.admit(products) {
            self.products = products;
        }
    }

    /// Counters for the summary cards.
    #[must_use]
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::of(&self.products)
    }

    /// Most recently updated products.
    #[must_use]
    pub fn recent(&self) -> Vec<&Product> {
        recent_products(&self.products, RECENT_PRODUCTS)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{
        api::MockProductsApi,
        test::{fixtures, helpers::expect_no_mutations},
    };

    #[tokio::test]
    async fn summarises_live_products() -> TestResult {
        let mut api = MockProductsApi::new();

        api.expect_list_products()
            .once()
            .return_once(|| Ok(vec![fixtures::mug(), fixtures::bottle()]));

        api.expect_get_product().never();
        expect_no_mutations(&mut api);

        let mut page = DashboardPage::new(Arc::new(api), MountGuard::new());

        page.load().await;

        let summary = page.summary();
        let recent: Vec<&str> = page.recent().iter().map(|p| p.id.as_str()).collect();

        assert_eq!(summary.products, 2);
        assert_eq!(summary.versions, 4);
        assert_eq!(summary.last_updated, Some("2025-04-02T14:45:00Z".parse()?));
        assert_eq!(recent, ["1", "2"]);

        Ok(())
    }
}
