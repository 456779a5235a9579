//! Integration tests for the catalog and version feed projections

use rusty_money::iso::USD;
use serde_json::json;
use testresult::TestResult;

use prodsnap::{
    analytics::CatalogSummary,
    catalog::{CatalogQuery, CatalogSort},
    feed::{FeedQuery, VersionFilter},
    pricing::format_price,
    products::Product,
};

fn catalog() -> TestResult<Vec<Product>> {
    let products = serde_json::from_value(json!([
        {
            "id": "1",
            "name": "Eco Friendly Water Bottle",
            "description": "Sustainable water bottle made from recycled materials",
            "price": 24.99,
            "image": "/placeholder.svg",
            "createdAt": "2025-01-15T10:30:00Z",
            "updatedAt": "2025-04-02T14:45:00Z",
            "versions": [
                {
                    "id": "v1",
                    "productId": "1",
                    "versionNumber": "1.0.0",
                    "changes": "Initial product launch",
                    "createdAt": "2025-01-15T10:30:00Z",
                    "createdBy": "John Doe"
                },
                {
                    "id": "v2",
                    "productId": "1",
                    "versionNumber": "1.1.0",
                    "changes": "Updated product description and price",
                    "createdAt": "2025-02-20T09:15:00Z",
                    "createdBy": "Jane Smith"
                },
                {
                    "id": "v3",
                    "productId": "1",
                    "versionNumber": "1.2.0",
                    "changes": "Reverted to v1.1.0",
                    "createdAt": "2025-04-02T14:45:00Z",
                    "createdBy": "System",
                    "isRevert": true,
                    "revertedFromVersion": "1.1.0"
                }
            ]
        },
        {
            "id": "2",
            "name": "Wireless Earbuds",
            "description": "Noise cancelling earbuds with long battery life",
            "price": 129.99,
            "image": null,
            "createdAt": "2025-02-01T08:00:00Z",
            "updatedAt": "2025-02-01T08:00:00Z",
            "versions": [
                {
                    "id": "v4",
                    "productId": "2",
                    "versionNumber": "1.0.0",
                    "changes": "Initial product launch",
                    "createdAt": "2025-02-01T08:00:00Z",
                    "createdBy": "John Doe"
                }
            ]
        },
        {
            "id": "3",
            "name": "bamboo Cutting Board",
            "description": "Durable cutting board",
            "price": 34.5,
            "createdAt": "2025-03-10T12:00:00Z",
            "updatedAt": "2025-03-12T12:00:00Z",
            "versions": [
                {
                    "id": "v5",
                    "productId": "3",
                    "versionNumber": "2.0.0",
                    "changes": "Initial product launch",
                    "createdAt": "2025-03-10T12:00:00Z",
                    "createdBy": "Jane Smith"
                },
                {
                    "id": "v6",
                    "productId": "3",
                    "versionNumber": "2.1.0",
                    "changes": "Reverted to v2.0.0",
                    "createdAt": "2025-03-12T12:00:00Z",
                    "createdBy": "System",
                    "isRevert": true,
                    "revertedFromVersion": "2.0.0"
                }
            ]
        }
    ]))?;

    Ok(products)
}

fn names(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn name_sorts_are_exact_reverses() -> TestResult {
    let products = catalog()?;

    let asc = CatalogQuery {
        sort: CatalogSort::NameAsc,
        ..CatalogQuery::default()
    };
    let desc = CatalogQuery {
        sort: CatalogSort::NameDesc,
        ..CatalogQuery::default()
    };

    let mut reversed = names(&desc.view(&products));
    reversed.reverse();

    assert_eq!(
        names(&asc.view(&products)),
        [
            "bamboo Cutting Board",
            "Eco Friendly Water Bottle",
            "Wireless Earbuds"
        ]
    );
    assert_eq!(names(&asc.view(&products)), reversed);

    Ok(())
}

#[test]
fn most_versions_puts_richest_history_first() -> TestResult {
    let products = catalog()?;

    let query = CatalogQuery {
        sort: CatalogSort::MostVersions,
        ..CatalogQuery::default()
    };

    let ids: Vec<&str> = query
        .view(&products)
        .iter()
        .map(|p| p.id.as_str())
        .collect();

    assert_eq!(ids, ["1", "3", "2"]);

    Ok(())
}

#[test]
fn reverts_filter_is_exactly_the_revert_subset() -> TestResult {
    let products = catalog()?;

    let query = FeedQuery {
        filter: VersionFilter::Reverts,
        ..FeedQuery::default()
    };

    let mut filtered: Vec<String> = query
        .view(&products)
        .iter()
        .map(|entry| entry.version.id.to_string())
        .collect();
    filtered.sort();

    let mut expected: Vec<String> = products
        .iter()
        .flat_map(|p| p.versions.iter())
        .filter(|v| v.is_revert())
        .map(|v| v.id.to_string())
        .collect();
    expected.sort();

    assert_eq!(filtered, expected);
    assert_eq!(filtered, ["v3", "v6"]);

    Ok(())
}

#[test]
fn feed_entries_carry_product_names() -> TestResult {
    let products = catalog()?;

    let query = FeedQuery {
        search: "earbuds".to_string(),
        ..FeedQuery::default()
    };

    let view = query.view(&products);

    let [entry] = view.as_slice() else {
        return Err(format!("expected one entry, got {view:?}").into());
    };

    assert_eq!(entry.product_name, "Wireless Earbuds");
    assert_eq!(entry.product_id.as_str(), "2");

    Ok(())
}

#[test]
fn fetched_products_are_consistent() -> TestResult {
    let products = catalog()?;

    for product in &products {
        assert!(
            product.issues().is_empty(),
            "{} carries issues: {:?}",
            product.name,
            product.issues()
        );
    }

    let summary = CatalogSummary::of(&products);

    assert_eq!(summary.versions, 6);
    assert_eq!(summary.reverts, 2);

    Ok(())
}

#[test]
fn catalog_price_display() -> TestResult {
    let products = catalog()?;

    let bottle = products.first().ok_or("expected a product")?;

    assert_eq!(format_price(bottle.price, USD)?, "$24.99");

    Ok(())
}
