//! Session Config

use clap::Args;
use prodsnap::products::User;

use crate::session::Session;

/// Identity recorded as the author of changes.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Current user id
    #[arg(long, env = "PRODSNAP_USER_ID", default_value = "1", global = true)]
    pub user_id: String,

    /// Current user display name, sent as `createdBy`
    #[arg(long, env = "PRODSNAP_USER_NAME", default_value = "admin", global = true)]
    pub user_name: String,

    /// Current user email
    #[arg(
        long,
        env = "PRODSNAP_USER_EMAIL",
        default_value = "admin@example.com",
        global = true
    )]
    pub user_email: String,

    /// Current user avatar URL
    #[arg(long, env = "PRODSNAP_USER_AVATAR", global = true)]
    pub user_avatar: Option<String>,
}

impl SessionConfig {
    /// Session for the configured user.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::new(User {
            id: self.user_id.clone(),
            name: self.user_name.clone(),
            email: self.user_email.clone(),
            avatar: self.user_avatar.clone(),
        })
    }
}
