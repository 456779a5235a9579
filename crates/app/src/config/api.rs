//! Backend Config

use clap::Args;

/// Catalog backend settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Backend base URL
    #[arg(
        long,
        env = "PRODSNAP_API_URL",
        default_value = "http://localhost:8080",
        global = true
    )]
    pub api_url: String,
}
