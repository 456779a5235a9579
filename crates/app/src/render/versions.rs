//! Version feed rendering

use std::io;

use prodsnap::feed::{FeedEntry, VersionFilter, VersionSort};
use tabled::builder::Builder;

use crate::{
    pages::versions::VersionsPage,
    render::{RenderError, date, table, write_empty, write_heading},
};

/// Print the version feed.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_versions(mut out: impl io::Write, page: &VersionsPage) -> Result<(), RenderError> {
    write_heading(
        &mut out,
        "Version History",
        Some("Track changes across all products"),
    )?;

    writeln!(
        out,
        "Filter: {}  Sort: {}",
        page.query.filter.key(),
        page.query.sort.key()
    )?;

    let entries = page.view();

    if entries.is_empty() {
        return write_empty(&mut out, &page.empty_state());
    }

    writeln!(out, "\n{}", feed_table(&entries))?;
    writeln!(
        out,
        "Filters: {}\nSort keys: {}",
        keys(VersionFilter::ALL.into_iter().map(VersionFilter::key)),
        keys(VersionSort::ALL.into_iter().map(VersionSort::key)),
    )?;

    Ok(())
}

fn feed_table(entries: &[FeedEntry<'_>]) -> String {
    let mut builder = Builder::default();

    builder.push_record([
        "Product", "Version", "Changes", "By", "Date", "Type", "Product ID", "Version ID",
    ]);

    for entry in entries {
        let kind = entry.version.lineage().unwrap_or_else(|| "Update".to_string());

        builder.push_record([
            entry.product_name.to_string(),
            format!("v{}", entry.version.version_number),
            entry.version.changes.clone(),
            entry.version.created_by.clone(),
            date(entry.version.created_at),
            kind,
            entry.product_id.to_string(),
            entry.version.id.to_string(),
        ]);
    }

    table(builder, 0..0).to_string()
}

fn keys(keys: impl Iterator<Item = &'static str>) -> String {
    keys.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use prodsnap::feed::FeedQuery;
    use testresult::TestResult;

    use super::*;
    use crate::{api::MockProductsApi, pages::MountGuard, test::fixtures};

    #[tokio::test]
    async fn entries_carry_product_names_and_lineage() -> TestResult {
        let mut api = MockProductsApi::new();

        api.expect_list_products().once().return_once(|| {
            Ok(vec![
                fixtures::reverted(fixtures::bottle(), "1.1.0", "2025-05-01T12:00:00Z"),
                fixtures::mug(),
            ])
        });

        let mut page = VersionsPage::new(Arc::new(api), MountGuard::new(), FeedQuery::default());
        page.load().await;

        let mut out = Vec::new();
        write_versions(&mut out, &page)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("Ceramic Coffee Mug"), "missing product name in {text}");
        assert!(text.contains("Reverted from 1.1.0"), "missing lineage in {text}");
        assert!(text.contains("May 1, 2025"), "missing date in {text}");

        Ok(())
    }
}
