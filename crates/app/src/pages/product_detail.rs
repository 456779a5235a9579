//! Product Detail Page

use std::sync::Arc;

use prodsnap::products::{Product, ProductId, ProductVersion, VersionId};
use tracing::{info, warn};

use crate::{
    api::ProductsApi,
    navigation::Route,
    notifications::Notification,
    pages::{Confirm, MountGuard, Outcome, ViewState, fetch_product, revert},
};

/// `/products/:productId`: current fields, version history and actions.
pub struct ProductDetailPage {
    api: Arc<dyn ProductsApi>,
    guard: MountGuard,
    product_id: ProductId,
    state: ViewState<Product>,
}

impl std::fmt::Debug for ProductDetailPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductDetailPage")
            .field("product_id", &self.product_id)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl ProductDetailPage {
    /// Mount the page for `product_id`.
    #[must_use]
    pub fn new(api: Arc<dyn ProductsApi>, guard: MountGuard, product_id: ProductId) -> Self {
        Self {
            api,
            guard,
            product_id,
            state: ViewState::Loading,
        }
    }

    /// Fetch the product. Returns the redirect to follow when it fails.
    pub async fn load(&mut self) -> Option<Route> {
        let fetched = fetch_product(self.api.as_ref(), &self.product_id).await;

        let Some(product) = self.guard.admit(fetched)? else {
            self.state = ViewState::NotFound;
            return Some(Route::Products);
        };

        self.state = ViewState::ready(product);

        None
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ViewState<Product> {
        &self.state
    }

    /// Loaded product.
    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.state.data()
    }

    /// Versions, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<&ProductVersion> {
        self.product()
            .map(Product::versions_newest_first)
            .unwrap_or_default()
    }

    /// Revert to one of this product's versions, then re-fetch.
    pub async fn revert_to(&mut self, version_id: &VersionId) -> Outcome {
        let Some(version_number) = self
            .product()
            .and_then(|product| product.version(version_id))
            .map(|version| version.version_number.clone())
        else {
            warn!(product_id = %self.product_id, version_id = %version_id, "unknown version");
            return Outcome::notify(
                Notification::error("Failed to revert product")
                    .with_description(format!("Version {version_id} does not belong to this product")),
            );
        };

        if !self.state.begin_submit() {
            return Outcome::none();
        }

        match revert(
            self.api.as_ref(),
            &self.product_id,
            version_id,
            &version_number,
        )
        .await
        {
            Ok(notification) => {
                info!(product_id = %self.product_id, version = %version_number, "product reverted");
                self.state.finish_submit(None);
                self.refresh().await;
                Outcome::notify(notification)
            }
            Err(notification) => {
                self.state.finish_submit(Some(notification.title.clone()));
                Outcome::notify(notification)
            }
        }
    }

    /// Delete the product after confirmation.
    pub async fn delete(&mut self, confirm: &mut impl Confirm) -> Outcome {
        let Some(name) = self.product().map(|product| product.name.clone()) else {
            return Outcome::none();
        };

        let prompt = format!("Are you sure you want to delete {name}? This cannot be undone.");

        if !confirm.confirm(&prompt) {
            return Outcome::none();
        }

        if !self.state.begin_submit() {
            return Outcome::none();
        }

        match self.api.delete_product(self.product_id.clone()).await {
            Ok(()) => {
                info!(product_id = %self.product_id, "product deleted");
                self.state.finish_submit(None);
                Outcome::notify(Notification::success("Product deleted successfully"))
                    .then_navigate(Route::Products)
            }
            Err(error) => {
                warn!(%error, product_id = %self.product_id, "delete failed");
                self.state
                    .finish_submit(Some("Failed to delete product".to_string()));
                Outcome::notify(
                    Notification::error("Failed to delete product")
                        .with_description("Please try again later."),
                )
            }
        }
    }

    /// Edit the product.
    #[must_use]
    pub fn edit(&self) -> Outcome {
        Outcome::navigate(Route::EditProduct(self.product_id.clone()))
    }

    /// Start a new version; every edit records one.
    #[must_use]
    pub fn new_version(&self) -> Outcome {
        self.edit()
    }

    async fn refresh(&mut self) {
        let fetched = fetch_product(self.api.as_ref(), &self.product_id).await;

        match self.guard.admit(fetched) {
            Some(Some(product)) => self.state = ViewState::ready(product),
            Some(None) => self.state = ViewState::NotFound,
            None => {}
        }
    }
}
