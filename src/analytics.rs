//! Analytics
//!
//! Catalog totals and per-product version lineage derived from a fetched
//! product list.

use std::cmp::Reverse;

use jiff::Timestamp;
use rustc_hash::FxHashMap;

use crate::{
    catalog::compare_names,
    products::{Product, ProductId},
};

/// Number of products shown in the dashboard's recent list.
pub const RECENT_PRODUCTS: usize = 4;

/// Catalog-wide counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Products in the catalog
    pub products: usize,

    /// Versions across every product
    pub versions: usize,

    /// Versions produced by reverts
    pub reverts: usize,

    /// Most recent `updatedAt`
    pub last_updated: Option<Timestamp>,
}

impl CatalogSummary {
    /// Summarise `products`.
    #[must_use]
    pub fn of(products: &[Product]) -> Self {
        Self {
            products: products.len(),
            versions: products.iter().map(Product::version_count).sum(),
            reverts: products.iter().map(Product::revert_count).sum(),
            last_updated: products.iter().map(|p| p.updated_at).max(),
        }
    }
}

/// Version lineage of one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineage<'a> {
    /// Product id
    pub product_id: &'a ProductId,

    /// Product name
    pub product_name: &'a str,

    /// Versions recorded
    pub versions: usize,

    /// Versions produced by reverts
    pub reverts: usize,

    /// Number of the newest version
    pub latest_version: Option<&'a str>,

    /// Author of the newest version
    pub last_editor: Option<&'a str>,
}

/// Lineage rows, products with most versions first and name breaking ties.
#[must_use]
pub fn lineage(products: &[Product]) -> Vec<Lineage<'_>> {
    let mut rows: Vec<Lineage<'_>> = products
        .iter()
        .map(|product| {
            let latest = product.latest_version();

            Lineage {
                product_id: &product.id,
                product_name: &product.name,
                versions: product.version_count(),
                reverts: product.revert_count(),
                latest_version: latest.map(|v| v.version_number.as_str()),
                last_editor: latest.map(|v| v.created_by.as_str()),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.versions
            .cmp(&a.versions)
            .then_with(|| compare_names(a.product_name, b.product_name))
    });

    rows
}

/// Version counts per author, most active first.
#[must_use]
pub fn contributors(products: &[Product]) -> Vec<(&str, usize)> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();

    for version in products.iter().flat_map(|p| p.versions.iter()) {
        *counts.entry(version.created_by.as_str()).or_default() += 1;
    }

    let mut contributors: Vec<(&str, usize)> = counts.into_iter().collect();

    contributors.sort_by(|(a_name, a_count), (b_name, b_count)| {
        b_count.cmp(a_count).then_with(|| compare_names(a_name, b_name))
    });

    contributors
}

/// Most recently updated products, newest first.
#[must_use]
pub fn recent_products(products: &[Product], limit: usize) -> Vec<&Product> {
    let mut recent: Vec<&Product> = products.iter().collect();

    recent.sort_by_key(|product| Reverse(product.updated_at));
    recent.truncate(limit);

    recent
}
