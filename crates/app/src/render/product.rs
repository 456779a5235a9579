//! Product detail rendering

use std::io;

use prodsnap::{
    pricing::display_price,
    products::{Product, ProductVersion},
};
use rusty_money::iso::Currency;
use tabled::builder::Builder;

use crate::render::{RenderError, date, table, write_heading};

/// Print a product's fields followed by its version history.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_product(
    mut out: impl io::Write,
    product: &Product,
    history: &[&ProductVersion],
    currency: &Currency,
) -> Result<(), RenderError> {
    write_heading(&mut out, &product.name, Some(&product.description))?;

    writeln!(out)?;
    writeln!(out, "  ID:       {}", product.id)?;
    writeln!(out, "  Price:    {}", display_price(product.price, currency))?;
    writeln!(out, "  Image:    {}", product.image)?;
    writeln!(out, "  Created:  {}", date(product.created_at))?;
    writeln!(out, "  Updated:  {}", date(product.updated_at))?;

    if let Some(latest) = product.latest_version() {
        writeln!(out, "  Current:  v{}", latest.version_number)?;
    }

    writeln!(out, "\n\x1b[1mVersion History\x1b[0m")?;

    if history.is_empty() {
        writeln!(out, "\n  No versions recorded\n")?;
        return Ok(());
    }

    writeln!(out, "{}", history_table(history))?;

    Ok(())
}

fn history_table(history: &[&ProductVersion]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Version", "Changes", "By", "Date", "Lineage"]);

    for version in history {
        builder.push_record([
            version.id.to_string(),
            format!("v{}", version.version_number),
            version.changes.clone(),
            version.created_by.clone(),
            date(version.created_at),
            version.lineage().unwrap_or_default(),
        ]);
    }

    table(builder, 0..0).to_string()
}
