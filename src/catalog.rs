//! Catalog
//!
//! Client-side projection of the product list: text search then one sort
//! order. Sorting is stable so fetch order breaks ties.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

use crate::products::Product;

/// Sort key outside the accepted set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown sort key `{key}`; expected one of: {expected}")]
pub struct UnknownKey {
    /// Key as given
    pub key: String,

    /// Accepted keys, comma separated
    pub expected: &'static str,
}

/// Catalog sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogSort {
    /// `createdAt` descending
    #[default]
    Newest,

    /// `createdAt` ascending
    Oldest,

    /// Name ascending
    NameAsc,

    /// Name descending
    NameDesc,

    /// Price descending
    PriceHigh,

    /// Price ascending
    PriceLow,

    /// Version count descending
    MostVersions,
}

impl CatalogSort {
    /// Every sort order, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Newest,
        Self::Oldest,
        Self::NameAsc,
        Self::NameDesc,
        Self::PriceHigh,
        Self::PriceLow,
        Self::MostVersions,
    ];

    /// Key used on the command line.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::PriceHigh => "price-high",
            Self::PriceLow => "price-low",
            Self::MostVersions => "most-versions",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::Oldest => "Oldest first",
            Self::NameAsc => "Name (A-Z)",
            Self::NameDesc => "Name (Z-A)",
            Self::PriceHigh => "Price (High to Low)",
            Self::PriceLow => "Price (Low to High)",
            Self::MostVersions => "Most versions",
        }
    }

    /// Compare two products under this order.
    #[must_use]
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Newest => b.created_at.cmp(&a.created_at),
            Self::Oldest => a.created_at.cmp(&b.created_at),
            Self::NameAsc => compare_names(&a.name, &b.name),
            Self::NameDesc => compare_names(&b.name, &a.name),
            Self::PriceHigh => b.price.total_cmp(&a.price),
            Self::PriceLow => a.price.total_cmp(&b.price),
            Self::MostVersions => b.version_count().cmp(&a.version_count()),
        }
    }
}

impl Display for CatalogSort {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.key())
    }
}

impl FromStr for CatalogSort {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.key() == s)
            .ok_or_else(|| UnknownKey {
                key: s.to_string(),
                expected: "newest, oldest, name-asc, name-desc, price-high, price-low, most-versions",
            })
    }
}

/// Case-folded comparison with the raw text as a tie-break, so that names
/// differing only in case still have a total order.
pub(crate) fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Search text and sort order for the catalog view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Case-insensitive substring matched on name or description
    pub search: String,

    /// Sort order
    pub sort: CatalogSort,
}

impl CatalogQuery {
    /// Whether a search term is active.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Filter and order `products`.
    #[must_use]
    pub fn view<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let needle = self.search.to_lowercase();

        let mut matched: Vec<&Product> = products
            .iter()
            .filter(|product| needle.is_empty() || product.matches(&needle))
            .collect();

        matched.sort_by(|a, b| self.sort.compare(a, b));

        matched
    }

    /// Empty-state title and hint.
    #[must_use]
    pub fn empty_state(&self) -> EmptyState {
        EmptyState {
            title: "No products found",
            hint: if self.is_searching() {
                "Try a different search term"
            } else {
                "Get started by creating a new product"
            },
        }
    }
}

/// Message shown when a projection has no rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    /// Headline
    pub title: &'static str,

    /// Follow-up hint
    pub hint: &'static str,
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use super::*;
    use crate::products::ProductId;

    fn product(id: &str, name: &str, price: f64, created_at: &str) -> TestResult<Product> {
        let created_at: Timestamp = created_at.parse()?;

        Ok(Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("{name} description"),
            price,
            image: String::new(),
            created_at,
            updated_at: created_at,
            versions: Vec::new(),
        })
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn parses_every_key_and_rejects_unknown() -> TestResult {
        for sort in CatalogSort::ALL {
            assert_eq!(sort.key().parse::<CatalogSort>()?, sort);
        }

        let result = "cheapest".parse::<CatalogSort>();

        assert!(
            matches!(result, Err(UnknownKey { ref key, .. }) if key == "cheapest"),
            "expected UnknownKey, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn default_sort_is_newest_first() -> TestResult {
        let products = [
            product("a", "Alpha", 1.0, "2025-01-01T00:00:00Z")?,
            product("b", "Beta", 2.0, "2025-03-01T00:00:00Z")?,
            product("c", "Gamma", 3.0, "2025-02-01T00:00:00Z")?,
        ];

        let view = CatalogQuery::default().view(&products);

        assert_eq!(ids(&view), ["b", "c", "a"]);

        Ok(())
    }

    #[test]
    fn search_matches_description_case_insensitively() -> TestResult {
        let mut bottle = product("a", "Bottle", 24.99, "2025-01-01T00:00:00Z")?;
        bottle.description = "Made from RECYCLED materials".to_string();

        let products = [bottle, product("b", "Mug", 9.5, "2025-01-02T00:00:00Z")?];

        let query = CatalogQuery {
            search: "recycled".to_string(),
            sort: CatalogSort::Newest,
        };

        assert_eq!(ids(&query.view(&products)), ["a"]);

        Ok(())
    }

    #[test]
    fn search_text_is_matched_untrimmed() -> TestResult {
        let mut bottle = product("a", "Eco Friendly Water Bottle", 24.99, "2025-01-01T00:00:00Z")?;
        bottle.description = "Sustainable and reusable".to_string();

        let products = [
            bottle,
            product("b", "Ceramic Coffee Mug", 12.5, "2025-01-02T00:00:00Z")?,
        ];

        let padded = CatalogQuery {
            search: "bottle ".to_string(),
            sort: CatalogSort::Newest,
        };

        assert!(padded.is_searching(), "padded text is still a search");
        assert!(
            padded.view(&products).is_empty(),
            "trailing space should not match a name ending in the term"
        );

        let inner = CatalogQuery {
            search: "water ".to_string(),
            sort: CatalogSort::Newest,
        };

        assert_eq!(ids(&inner.view(&products)), ["a"]);

        Ok(())
    }

    #[test]
    fn price_sorts_are_numeric() -> TestResult {
        let products = [
            product("a", "A", 9.0, "2025-01-01T00:00:00Z")?,
            product("b", "B", 10.0, "2025-01-01T00:00:00Z")?,
            product("c", "C", 100.0, "2025-01-01T00:00:00Z")?,
        ];

        let high = CatalogQuery {
            sort: CatalogSort::PriceHigh,
            ..CatalogQuery::default()
        };
        let low = CatalogQuery {
            sort: CatalogSort::PriceLow,
            ..CatalogQuery::default()
        };

        assert_eq!(ids(&high.view(&products)), ["c", "b", "a"]);
        assert_eq!(ids(&low.view(&products)), ["a", "b", "c"]);

        Ok(())
    }

    #[test]
    fn ties_keep_fetch_order() -> TestResult {
        let products = [
            product("first", "Same", 5.0, "2025-01-01T00:00:00Z")?,
            product("second", "Same", 5.0, "2025-01-01T00:00:00Z")?,
        ];

        for sort in CatalogSort::ALL {
            let query = CatalogQuery {
                sort,
                ..CatalogQuery::default()
            };

            assert_eq!(
                ids(&query.view(&products)),
                ["first", "second"],
                "{sort} should be stable"
            );
        }

        Ok(())
    }

    #[test]
    fn empty_state_hint_depends_on_search() {
        let browsing = CatalogQuery::default();
        let searching = CatalogQuery {
            search: "zzz".to_string(),
            ..CatalogQuery::default()
        };

        assert_eq!(
            browsing.empty_state().hint,
            "Get started by creating a new product"
        );
        assert_eq!(searching.empty_state().hint, "Try a different search term");
        assert_eq!(searching.empty_state().title, "No products found");
    }
}
