//! Display Config

use clap::Args;
use prodsnap::pricing::{PriceError, currency_from_code};
use rusty_money::iso;

/// Presentation settings.
#[derive(Debug, Args)]
pub struct DisplayConfig {
    /// ISO 4217 currency used to display prices (USD, GBP, EUR, CAD, AUD)
    #[arg(
        long,
        env = "PRODSNAP_CURRENCY",
        default_value = "USD",
        value_parser = parse_currency,
        global = true
    )]
    pub currency: &'static iso::Currency,
}

fn parse_currency(code: &str) -> Result<&'static iso::Currency, PriceError> {
    currency_from_code(code)
}
