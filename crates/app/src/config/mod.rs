//! Client configuration module

use clap::Args;

pub mod api;
pub mod display;
pub mod features;
pub mod observability;
pub mod session;

pub use api::ApiConfig;
pub use display::DisplayConfig;
pub use features::FeatureFlags;
pub use observability::{LogFormat, LoggingConfig};
pub use session::SessionConfig;

/// `ProdSnap` client configuration, from flags, environment and `.env`.
#[derive(Debug, Args)]
pub struct ClientConfig {
    /// Backend settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Presentation settings.
    #[command(flatten)]
    pub display: DisplayConfig,

    /// Current user.
    #[command(flatten)]
    pub session: SessionConfig,

    /// Feature-flagged views.
    #[command(flatten)]
    pub features: FeatureFlags,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
