//! Session

use prodsnap::products::User;

/// Identity of the person operating the client.
///
/// Passed explicitly to the pages that record an author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
}

impl Session {
    /// Start a session for `user`.
    #[must_use]
    pub fn new(user: User) -> Self {
        Self { user }
    }

    /// Current user.
    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Name recorded as `createdBy` on new versions.
    #[must_use]
    pub fn actor(&self) -> &str {
        &self.user.name
    }
}
