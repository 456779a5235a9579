//! Edit Product Page

use std::sync::Arc;

use prodsnap::{
    forms::{EditProductForm, FormErrors},
    products::{Product, ProductId},
};
use tracing::{info, warn};

use crate::{
    api::ProductsApi,
    navigation::Route,
    notifications::Notification,
    pages::{MountGuard, Outcome, ViewState, fetch_product},
    session::Session,
};

/// `/products/:productId/edit`: update the product and record a version.
pub struct EditProductPage {
    api: Arc<dyn ProductsApi>,
    guard: MountGuard,
    session: Session,
    product_id: ProductId,
    state: ViewState<Product>,

    /// Form input, filled from the product once loaded
    pub form: EditProductForm,

    /// Field errors from the last submit
    pub errors: FormErrors,
}

impl std::fmt::Debug for EditProductPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditProductPage")
            .field("product_id", &self.product_id)
            .field("state", &self.state)
            .field("form", &self.form)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl EditProductPage {
    /// Mount the page for `product_id`.
    #[must_use]
    pub fn new(
        api: Arc<dyn ProductsApi>,
        guard: MountGuard,
        session: Session,
        product_id: ProductId,
    ) -> Self {
        Self {
            api,
            guard,
            session,
            product_id,
            state: ViewState::Loading,
            form: EditProductForm::default(),
            errors: FormErrors::default(),
        }
    }

    /// Fetch the product and fill the form. Returns the redirect to follow
    /// when it fails.
    pub async fn load(&mut self) -> Option<Route> {
        let fetched = fetch_product(self.api.as_ref(), &self.product_id).await;

        let Some(product) = self.guard.admit(fetched)? else {
            self.state = ViewState::NotFound;
            return Some(Route::Products);
        };

        self.form = EditProductForm::from_product(&product);
        self.state = ViewState::ready(product);

        None
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ViewState<Product> {
        &self.state
    }

    /// Product as loaded.
    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.state.data()
    }

    /// Validate and send the edit.
    pub async fn submit(&mut self) -> Outcome {
        if self.product().is_none() {
            return Outcome::none();
        }

        let edit = match self.form.submit(self.session.actor()) {
            Ok(edit) => edit,
            Err(errors) => {
                warn!(%errors, product_id = %self.product_id, "edit form blocked by validation");
                self.errors = errors;
                return Outcome::none();
            }
        };

        self.errors = FormErrors::default();

        if !self.state.begin_submit() {
            return Outcome::none();
        }

        match self
            .api
            .update_product(self.product_id.clone(), edit)
            .await
        {
            Ok(()) => {
                info!(product_id = %self.product_id, "product updated");
                self.state.finish_submit(None);
                Outcome::notify(Notification::success("Product updated successfully!"))
                    .then_navigate(Route::Product(self.product_id.clone()))
            }
            Err(error) => {
                warn!(%error, product_id = %self.product_id, "update failed");
                self.state
                    .finish_submit(Some("Failed to update product".to_string()));
                Outcome::notify(
                    Notification::error("Failed to update product")
                        .with_optional_description(error.server_message()),
                )
            }
        }
    }

    /// Leave without saving.
    #[must_use]
    pub fn cancel(&self) -> Outcome {
        Outcome::navigate(Route::Product(self.product_id.clone()))
    }
}
