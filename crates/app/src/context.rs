//! App Context

use std::sync::Arc;

use rusty_money::iso;
use thiserror::Error;

use crate::{
    api::{ApiError, HttpProductsApi, ProductsApi},
    config::{ClientConfig, FeatureFlags},
    session::Session,
};

/// Errors raised while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The backend client could not be created
    #[error("invalid backend url")]
    Api(#[source] ApiError),
}

/// Everything a page needs from the outside world.
#[derive(Clone)]
pub struct AppContext {
    /// Backend client
    pub api: Arc<dyn ProductsApi>,

    /// Current user
    pub session: Session,

    /// Display currency for prices
    pub currency: &'static iso::Currency,

    /// Feature-flagged views
    pub features: FeatureFlags,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("session", &self.session)
            .field("currency", &self.currency)
            .field("features", &self.features)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend URL is invalid.
    pub fn from_config(config: &ClientConfig) -> Result<Self, AppInitError> {
        let api = HttpProductsApi::new(&config.api.api_url).map_err(AppInitError::Api)?;

        Ok(Self {
            api: Arc::new(api),
            session: config.session.session(),
            currency: config.display.currency,
            features: config.features,
        })
    }
}
