//! Pages
//!
//! One state machine per view. Pages fetch when loaded, derive their
//! projections locally and re-fetch after every mutation.

use std::{
    mem,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use prodsnap::products::{Product, ProductId, VersionId};
use tracing::{debug, warn};

use crate::{api::ProductsApi, navigation::Route, notifications::Notification};

pub mod analytics;
pub mod catalog;
pub mod dashboard;
pub mod edit_product;
pub mod new_product;
pub mod placeholder;
pub mod product_detail;
pub mod versions;

/// Tracks whether a page is still mounted.
///
/// Clones share state; unmounting through any clone discards results that
/// arrive afterwards.
#[derive(Debug, Clone)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    /// Guard for a freshly mounted page.
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Mark the page as unmounted.
    pub fn unmount(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Whether the page is still mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Pass `value` through only while mounted.
    pub fn admit<T>(&self, value: T) -> Option<T> {
        if self.is_mounted() {
            Some(value)
        } else {
            debug!("page unmounted; discarding fetch result");
            None
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and action state of a page built around one fetched value.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Fetch in flight
    Loading,

    /// Data available, with the error of the last failed action if any
    Ready {
        /// Fetched value
        data: T,

        /// Message from the last failed action
        error: Option<String>,
    },

    /// An action is in flight
    Submitting(T),

    /// The fetch failed
    NotFound,
}

impl<T> ViewState<T> {
    /// Ready state without an error.
    pub fn ready(data: T) -> Self {
        Self::Ready { data, error: None }
    }

    /// Current data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready { data, .. } | Self::Submitting(data) => Some(data),
            Self::Loading | Self::NotFound => None,
        }
    }

    /// Error left by the last failed action.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ready { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Whether an action is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting(_))
    }

    /// `ready → submitting`. Returns `false` from any other state.
    pub fn begin_submit(&mut self) -> bool {
        match mem::replace(self, Self::Loading) {
            Self::Ready { data, .. } => {
                *self = Self::Submitting(data);
                true
            }
            other => {
                *self = other;
                false
            }
        }
    }

    /// `submitting → ready`, recording `error` when the action failed.
    pub fn finish_submit(&mut self, error: Option<String>) {
        match mem::replace(self, Self::Loading) {
            Self::Submitting(data) => *self = Self::Ready { data, error },
            other => *self = other,
        }
    }
}

/// What the shell should do after a page action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Notification to show
    pub notification: Option<Notification>,

    /// Route to navigate to
    pub navigate: Option<Route>,
}

impl Outcome {
    /// Nothing to show, stay on the page.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Show a notification and stay on the page.
    #[must_use]
    pub fn notify(notification: Notification) -> Self {
        Self {
            notification: Some(notification),
            navigate: None,
        }
    }

    /// Navigate without a notification.
    #[must_use]
    pub fn navigate(route: Route) -> Self {
        Self {
            notification: None,
            navigate: Some(route),
        }
    }

    /// Navigate to `route` as well.
    #[must_use]
    pub fn then_navigate(mut self, route: Route) -> Self {
        self.navigate = Some(route);
        self
    }
}

/// Interactive yes/no confirmation.
pub trait Confirm {
    /// Ask `prompt`; `true` means proceed.
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Fetch the product list, failing open to an empty list.
pub(crate) async fn fetch_products(api: &dyn ProductsApi) -> Vec<Product> {
    match api.list_products().await {
        Ok(products) => {
            products.iter().for_each(report_issues);
            products
        }
        Err(error) => {
            warn!(%error, "failed to fetch products; showing an empty list");
            Vec::new()
        }
    }
}

/// Fetch one product, `None` on any failure.
pub(crate) async fn fetch_product(api: &dyn ProductsApi, id: &ProductId) -> Option<Product> {
    match api.get_product(id.clone()).await {
        Ok(product) => {
            report_issues(&product);
            Some(product)
        }
        Err(error) => {
            warn!(%error, product_id = %id, "failed to fetch product");
            None
        }
    }
}

/// Ask the backend to revert `product_id` to `version_id`.
///
/// `version_number` is only used for the notification.
pub(crate) async fn revert(
    api: &dyn ProductsApi,
    product_id: &ProductId,
    version_id: &VersionId,
    version_number: &str,
) -> Result<Notification, Notification> {
    match api
        .revert_product(product_id.clone(), version_id.clone())
        .await
    {
        Ok(()) => Ok(Notification::success(format!(
            "Reverted to version {version_number}"
        ))),
        Err(error) => {
            warn!(%error, product_id = %product_id, version_id = %version_id, "revert failed");

            Err(Notification::error("Failed to revert product")
                .with_optional_description(error.server_message()))
        }
    }
}

fn report_issues(product: &Product) {
    let issues = product.issues();

    if !issues.is_empty() {
        warn!(product_id = %product.id, ?issues, "product payload breaks catalog invariants");
    }
}
