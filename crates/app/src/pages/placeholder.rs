//! Placeholder Pages

use crate::navigation::Route;

/// Static page with a heading and a short message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Heading
    pub title: &'static str,

    /// Badge under the message, if any
    pub badge: Option<&'static str>,

    /// Body text
    pub message: &'static str,
}

const COMING_SOON: &str = "This feature will be implemented in a future update.";

impl Placeholder {
    /// `/orders`.
    pub const ORDERS: Self = Self {
        title: "Orders",
        badge: Some("Coming Soon"),
        message: "This feature will be implemented in a future update. \
                  Track and manage your customer orders here.",
    };

    /// `/analytics` while the view is disabled.
    pub const ANALYTICS: Self = Self {
        title: "Analytics",
        badge: Some("Coming Soon"),
        message: "This feature will be implemented in a future update. \
                  Track product performance and version adoption here.",
    };

    /// `/settings`.
    pub const SETTINGS: Self = Self {
        title: "Settings",
        badge: Some("Coming Soon"),
        message: "This feature will be implemented in a future update. \
                  Configure your application preferences here.",
    };

    /// Unknown routes.
    pub const NOT_FOUND: Self = Self {
        title: "Page Not Found",
        badge: None,
        message: "Sorry, we couldn't find the page you're looking for.",
    };

    /// Placeholder for `route`, if it has one.
    #[must_use]
    pub fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::Orders => Some(Self::ORDERS),
            Route::Settings => Some(Self::SETTINGS),
            Route::NotFound(_) => Some(Self::NOT_FOUND),
            _ => None,
        }
    }

    /// Whether this is one of the not-yet-built views.
    #[must_use]
    pub fn is_coming_soon(&self) -> bool {
        self.message.starts_with(COMING_SOON)
    }

    /// Link offered below the message, if any.
    #[must_use]
    pub fn action(&self) -> Option<(&'static str, Route)> {
        (!self.is_coming_soon()).then_some(("Back to Dashboard", Route::Dashboard))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_routes_get_not_found() {
        let route = Route::parse("/inventory");

        assert_eq!(Placeholder::for_route(&route), Some(Placeholder::NOT_FOUND));
        assert!(
            !Placeholder::NOT_FOUND.is_coming_soon(),
            "not found is not a pending feature"
        );
        assert_eq!(
            Placeholder::NOT_FOUND.action(),
            Some(("Back to Dashboard", Route::Dashboard))
        );
    }

    #[test]
    fn pending_views_are_coming_soon() {
        for placeholder in [Placeholder::ORDERS, Placeholder::SETTINGS, Placeholder::ANALYTICS] {
            assert!(
                placeholder.is_coming_soon(),
                "{} should be coming soon",
                placeholder.title
            );
            assert_eq!(placeholder.action(), None);
        }
    }

    #[test]
    fn real_views_have_no_placeholder() {
        assert_eq!(Placeholder::for_route(&Route::Versions), None);
        assert_eq!(Placeholder::for_route(&Route::Analytics), None);
    }
}
