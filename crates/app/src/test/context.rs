//! Test context for page-level tests.

use std::sync::Arc;

use prodsnap::products::User;
use rusty_money::iso;

use crate::{
    api::MockProductsApi, config::FeatureFlags, context::AppContext, session::Session,
};

pub(crate) fn test_session() -> Session {
    Session::new(User {
        id: "1".to_string(),
        name: "admin".to_string(),
        email: "admin@example.com".to_string(),
        avatar: None,
    })
}

pub(crate) fn test_context(api: MockProductsApi) -> AppContext {
    AppContext {
        api: Arc::new(api),
        session: test_session(),
        currency: iso::USD,
        features: FeatureFlags::default(),
    }
}
