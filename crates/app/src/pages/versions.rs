//! Version History Page

use std::sync::Arc;

use prodsnap::{
    catalog::EmptyState,
    feed::{FeedEntry, FeedQuery},
    products::{Product, ProductId, VersionId},
};
use tracing::warn;

use crate::{
    api::ProductsApi,
    notifications::Notification,
    pages::{MountGuard, Outcome, fetch_products, revert},
};

/// `/versions`: every version of every product in one feed.
pub struct VersionsPage {
    api: Arc<dyn ProductsApi>,
    guard: MountGuard,
    products: Vec<Product>,
    reverting: bool,

    /// Search text, filter and sort order
    pub query: FeedQuery,
}

impl std::fmt::Debug for VersionsPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionsPage")
            .field("products", &self.products.len())
            .field("reverting", &self.reverting)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl VersionsPage {
    /// Mount the page.
    #[must_use]
    pub fn new(api: Arc<dyn ProductsApi>, guard: MountGuard, query: FeedQuery) -> Self {
        Self {
            api,
            guard,
            products: Vec::new(),
            reverting: false,
            query,
        }
    }

    /// Fetch the product list.
    pub async fn load(&mut self) {
        let products = fetch_products(self.api.as_ref()).await;

        if let Some(products) = self.guard.admit(products) {
            self.products = products;
        }
    }

    /// Matching versions, in query order.
    #[must_use]
    pub fn view(&self) -> Vec<FeedEntry<'_>> {
        self.query.view(&self.products)
    }

    /// Message for an empty view.
    #[must_use]
    pub fn empty_state(&self) -> EmptyState {
        self.query.empty_state()
    }

    /// Revert `product_id` to `version_id`, then re-fetch the feed.
    pub async fn revert(&mut self, product_id: &ProductId, version_id: &VersionId) -> Outcome {
        let Some(version_number) = self
            .products
            .iter()
            .find(|product| &product.id == product_id)
            .and_then(|product| product.version(version_id))
            .map(|version| version.version_number.clone())
        else {
            warn!(%product_id, %version_id, "version not in feed");
            return Outcome::notify(
                Notification::error("Failed to revert product")
                    .with_description(format!("Version {version_id} is not part of {product_id}")),
            );
        };

        if self.reverting {
            return Outcome::none();
        }

        self.reverting = true;
        let result = revert(self.api.as_ref(), product_id, version_id, &version_number).await;
        self.reverting = false;

        match result {
            Ok(notification) => {
                self.load().await;
                Outcome::notify(notification)
            }
            Err(notification) => Outcome::notify(notification),
        }
    }
}
