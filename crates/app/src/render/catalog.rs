//! Catalog rendering

use std::io;

use prodsnap::{catalog::CatalogSort, pricing::display_price, products::Product};
use rusty_money::iso::Currency;
use tabled::builder::Builder;

use crate::{
    pages::catalog::CatalogPage,
    render::{RenderError, date, table, write_empty, write_heading},
};

/// Print the catalog page.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_catalog(
    mut out: impl io::Write,
    page: &CatalogPage,
    currency: &Currency,
) -> Result<(), RenderError> {
    write_heading(&mut out, "Products", Some("Manage your product catalog"))?;

    let search = page.query.search.trim();

    if search.is_empty() {
        writeln!(out, "Sort: {}", page.query.sort.label())?;
    } else {
        writeln!(out, "Search: \"{search}\"  Sort: {}", page.query.sort.label())?;
    }

    let products = page.view();

    if products.is_empty() {
        return write_empty(&mut out, &page.empty_state());
    }

    writeln!(out, "\n{}", catalog_table(&products, currency))?;
    writeln!(out, "Sort keys: {}", sort_keys())?;

    Ok(())
}

fn catalog_table(products: &[&Product], currency: &Currency) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Price", "Version", "Versions", "Updated"]);

    for product in products {
        let latest = product
            .latest_version()
            .map_or_else(|| "-".to_string(), |v| format!("v{}", v.version_number));

        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            display_price(product.price, currency),
            latest,
            product.version_count().to_string(),
            date(product.updated_at),
        ]);
    }

    table(builder, 2..3).to_string()
}

fn sort_keys() -> String {
    CatalogSort::ALL
        .into_iter()
        .map(CatalogSort::key)
        .collect::<Vec<_>>()
        .join(", ")
}
