//! Feature Flags

use clap::Args;

/// Views that are off unless enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Args)]
pub struct FeatureFlags {
    /// Show the orders view in navigation
    #[arg(
        long = "enable-orders",
        env = "PRODSNAP_ENABLE_ORDERS",
        default_value_t = false,
        global = true
    )]
    pub orders: bool,

    /// Enable the analytics view
    #[arg(
        long = "enable-analytics",
        env = "PRODSNAP_ENABLE_ANALYTICS",
        default_value_t = false,
        global = true
    )]
    pub analytics: bool,

    /// Show the settings view in navigation
    #[arg(
        long = "enable-settings",
        env = "PRODSNAP_ENABLE_SETTINGS",
        default_value_t = false,
        global = true
    )]
    pub settings: bool,
}
