//! Navigation
//!
//! Client routes and the sidebar that links them.

use std::{
    convert::Infallible,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use prodsnap::products::ProductId;

use crate::config::FeatureFlags;

/// A client route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Dashboard,

    /// `/products`
    Products,

    /// `/products/new`
    NewProduct,

    /// `/products/:productId`
    Product(ProductId),

    /// `/products/:productId/edit`
    EditProduct(ProductId),

    /// `/versions`
    Versions,

    /// `/orders`
    Orders,

    /// `/analytics`
    Analytics,

    /// `/settings`
    Settings,

    /// Anything else, with the path as requested
    NotFound(String),
}

impl Route {
    /// Resolve a path. Trailing slashes, query strings and fragments are
    /// ignored.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let trimmed = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Dashboard,
            ["products"] => Self::Products,
            ["products", "new"] => Self::NewProduct,
            ["products", id] => Self::Product(ProductId::new(*id)),
            ["products", id, "edit"] => Self::EditProduct(ProductId::new(*id)),
            ["versions"] => Self::Versions,
            ["orders"] => Self::Orders,
            ["analytics"] => Self::Analytics,
            ["settings"] => Self::Settings,
            _ => Self::NotFound(path.to_string()),
        }
    }

    /// Canonical path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::Products => "/products".to_string(),
            Self::NewProduct => "/products/new".to_string(),
            Self::Product(id) => format!("/products/{id}"),
            Self::EditProduct(id) => format!("/products/{id}/edit"),
            Self::Versions => "/versions".to_string(),
            Self::Orders => "/orders".to_string(),
            Self::Analytics => "/analytics".to_string(),
            Self::Settings => "/settings".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Label shown in the sidebar
    pub label: &'static str,

    /// Destination
    pub route: Route,
}

/// Sidebar entries, feature-flagged views only when enabled.
#[must_use]
pub fn sidebar(features: &FeatureFlags) -> Vec<NavItem> {
    [
        ("Dashboard", Route::Dashboard, true),
        ("Products", Route::Products, true),
        ("Version History", Route::Versions, true),
        ("Orders", Route::Orders, features.orders),
        ("Analytics", Route::Analytics, features.analytics),
        ("Settings", Route::Settings, features.settings),
    ]
    .into_iter()
    .filter(|(_, _, enabled)| *enabled)
    .map(|(label, route, _)| NavItem { label, route })
    .collect()
}
