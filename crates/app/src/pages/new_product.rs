//! New Product Page

use std::sync::Arc;

use prodsnap::forms::{FormErrors, NewProductForm};
use tracing::{info, warn};

use crate::{
    api::ProductsApi, navigation::Route, notifications::Notification, pages::Outcome,
    session::Session,
};

/// `/products/new`: create form.
pub struct NewProductPage {
    api: Arc<dyn ProductsApi>,
    session: Session,
    submitting: bool,

    /// Form input
    pub form: NewProductForm,

    /// Field errors from the last submit
    pub errors: FormErrors,
}

impl std::fmt::Debug for NewProductPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewProductPage")
            .field("form", &self.form)
            .field("errors", &self.errors)
            .field("submitting", &self.submitting)
            .finish_non_exhaustive()
    }
}

impl NewProductPage {
    /// Mount the page with default form values.
    #[must_use]
    pub fn new(api: Arc<dyn ProductsApi>, session: Session) -> Self {
        Self {
            api,
            session,
            submitting: false,
            form: NewProductForm::default(),
            errors: FormErrors::default(),
        }
    }

    /// Whether a submission is in flight.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and send the form.
    ///
    /// Validation failures are left in [`Self::errors`] and nothing is sent.
    pub async fn submit(&mut self) -> Outcome {
        if self.submitting {
            return Outcome::none();
        }

        let submission = match self.form.clone().submit(self.session.actor()) {
            Ok(submission) => submission,
            Err(errors) => {
                warn!(%errors, "create form blocked by validation");
                self.errors = errors;
                return Outcome::none();
            }
        };

        self.errors = FormErrors::default();
        self.submitting = true;

        let name = submission.name.clone();
        let result = self.api.create_product(submission).await;

        self.submitting = false;

        match result {
            Ok(()) => {
                info!(%name, "product created");
                Outcome::notify(
                    Notification::success("Product created")
                        .with_description(format!("{name} has been added to your products.")),
                )
                .then_navigate(Route::Products)
            }
            Err(error) => {
                warn!(%error, %name, "create failed");
                Outcome::notify(
                    Notification::error("Failed to create product")
                        .with_optional_description(error.server_message()),
                )
            }
        }
    }
}
