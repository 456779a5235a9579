//! Dashboard and analytics rendering

use std::io;

use prodsnap::{analytics::CatalogSummary, pricing::display_price};
use rusty_money::iso::Currency;
use tabled::builder::Builder;

use crate::{
    pages::{analytics::AnalyticsPage, dashboard::DashboardPage},
    render::{RenderError, date, table, write_heading, write_placeholder},
};

/// Print the dashboard.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_dashboard(
    mut out: impl io::Write,
    page: &DashboardPage,
    user_name: &str,
    currency: &Currency,
) -> Result<(), RenderError> {
    write_heading(
        &mut out,
        "Dashboard",
        Some(&format!("Welcome back, {user_name}")),
    )?;

    write_summary(&mut out, &page.summary())?;

    writeln!(out, "\n\x1b[1mRecent Products\x1b[0m")?;

    let recent = page.recent();

    if recent.is_empty() {
        writeln!(out, "\n  No products yet\n")?;
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Name", "Price", "Version", "Updated"]);

    for product in recent {
        builder.push_record([
            product.name.clone(),
            display_price(product.price, currency),
            product
                .latest_version()
                .map_or_else(|| "-".to_string(), |v| format!("v{}", v.version_number)),
            date(product.updated_at),
        ]);
    }

    writeln!(out, "{}", table(builder, 1..2))?;

    Ok(())
}

/// Print the analytics view, or its placeholder when disabled.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_analytics(mut out: impl io::Write, page: &AnalyticsPage) -> Result<(), RenderError> {
    if let Some(placeholder) = page.placeholder() {
        return write_placeholder(out, &placeholder);
    }

    write_heading(&mut out, "Analytics", Some("Version lineage across the catalog"))?;
    write_summary(&mut out, &page.summary())?;

    let mut lineage = Builder::default();

    lineage.push_record(["Product", "Versions", "Reverts", "Latest", "Last Editor"]);

    for row in page.lineage() {
        lineage.push_record([
            row.product_name.to_string(),
            row.versions.to_string(),
            row.reverts.to_string(),
            row.latest_version
                .map_or_else(|| "-".to_string(), |v| format!("v{v}")),
            row.last_editor.unwrap_or("-").to_string(),
        ]);
    }

    writeln!(out, "\n\x1b[1mLineage\x1b[0m\n{}", table(lineage, 1..3))?;

    let mut contributors = Builder::default();

    contributors.push_record(["Author", "Versions"]);

    for (name, count) in page.contributors() {
        contributors.push_record([name.to_string(), count.to_string()]);
    }

    writeln!(
        out,
        "\n\x1b[1mContributors\x1b[0m\n{}",
        table(contributors, 1..2)
    )?;

    Ok(())
}

fn write_summary(out: &mut impl io::Write, summary: &CatalogSummary) -> Result<(), RenderError> {
    let last_updated = summary.last_updated.map_or_else(|| "-".to_string(), date);

    writeln!(out)?;
    writeln!(out, "  Products:      {}", summary.products)?;
    writeln!(out, "  Versions:      {}", summary.versions)?;
    writeln!(out, "  Reverts:       {}", summary.reverts)?;
    writeln!(out, "  Last updated:  {last_updated}")?;

    Ok(())
}
