//! Version Feed
//!
//! Every product's versions flattened into one cross-product sequence.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::{
    catalog::{EmptyState, UnknownKey},
    products::{Product, ProductId, ProductVersion},
};

/// One version in the feed, tagged with its owning product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedEntry<'a> {
    /// Owning product id
    pub product_id: &'a ProductId,

    /// Owning product name
    pub product_name: &'a str,

    /// The version itself
    pub version: &'a ProductVersion,
}

impl FeedEntry<'_> {
    fn matches(&self, needle: &str) -> bool {
        self.product_name.to_lowercase().contains(needle)
            || self.version.changes.to_lowercase().contains(needle)
            || self.version.version_number.to_lowercase().contains(needle)
    }
}

/// Version feed filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionFilter {
    /// Everything
    #[default]
    All,

    /// Version numbers starting with `1.`
    Major,

    /// Version numbers not starting with `1.`
    Minor,

    /// Versions produced by reverts
    Reverts,
}

impl VersionFilter {
    /// Every filter, in menu order.
    pub const ALL: [Self; 4] = [Self::All, Self::Major, Self::Minor, Self::Reverts];

    /// Key used on the command line.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Reverts => "reverts",
        }
    }

    /// Whether `version` passes this filter.
    ///
    /// The major/minor split is a plain prefix check on `1.`.
    #[must_use]
    pub fn accepts(self, version: &ProductVersion) -> bool {
        match self {
            Self::All => true,
            Self::Major => version.version_number.starts_with("1."),
            Self::Minor => !version.version_number.starts_with("1."),
            Self::Reverts => version.is_revert(),
        }
    }
}

impl Display for VersionFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.key())
    }
}

impl FromStr for VersionFilter {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.key() == s)
            .ok_or_else(|| UnknownKey {
                key: s.to_string(),
                expected: "all, major, minor, reverts",
            })
    }
}

/// Version feed sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VersionSort {
    /// `createdAt` descending
    #[default]
    Newest,

    /// `createdAt` ascending
    Oldest,

    /// Version number ascending, lexical
    VersionAsc,

    /// Version number descending, lexical
    VersionDesc,
}

impl VersionSort {
    /// Every sort order, in menu order.
    pub const ALL: [Self; 4] = [
        Self::Newest,
        Self::Oldest,
        Self::VersionAsc,
        Self::VersionDesc,
    ];

    /// Key used on the command line.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::VersionAsc => "version-asc",
            Self::VersionDesc => "version-desc",
        }
    }

    /// Compare two versions under this order.
    ///
    /// Version numbers compare as text, so `1.10.0` sorts before `1.2.0`.
    #[must_use]
    pub fn compare(self, a: &ProductVersion, b: &ProductVersion) -> Ordering {
        match self {
            Self::Newest => b.created_at.cmp(&a.created_at),
            Self::Oldest => a.created_at.cmp(&b.created_at),
            Self::VersionAsc => a.version_number.cmp(&b.version_number),
            Self::VersionDesc => b.version_number.cmp(&a.version_number),
        }
    }
}

impl Display for VersionSort {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.key())
    }
}

impl FromStr for VersionSort {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.key() == s)
            .ok_or_else(|| UnknownKey {
                key: s.to_string(),
                expected: "newest, oldest, version-asc, version-desc",
            })
    }
}

/// Flatten every product's versions, product order then recorded order.
#[must_use]
pub fn flatten(products: &[Product]) -> Vec<FeedEntry<'_>> {
    products
        .iter()
        .flat_map(|product| {
            product.versions.iter().map(move |version| FeedEntry {
                product_id: &product.id,
                product_name: &product.name,
                version,
            })
        })
        .collect()
}

/// Search, filter and sort settings for the version feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    /// Matched on product name, changes or version number
    pub search: String,

    /// Filter, combined with the search by AND
    pub filter: VersionFilter,

    /// Sort order
    pub sort: VersionSort,
}

impl FeedQuery {
    /// Whether a search term is active.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.search.trim().is_empty()
    }

    /// Flatten, filter and order the versions of `products`.
    #[must_use]
    pub fn view<'a>(&self, products: &'a [Product]) -> Vec<FeedEntry<'a>> {
        let needle = self.search.to_lowercase();

        let mut entries: Vec<FeedEntry<'a>> = flatten(products)
            .into_iter()
            .filter(|entry| self.filter.accepts(entry.version))
            .filter(|entry| needle.is_empty() || entry.matches(&needle))
            .collect();

        entries.sort_by(|a, b| self.sort.compare(a.version, b.version));

        entries
    }

    /// Empty-state title and hint.
    #[must_use]
    pub fn empty_state(&self) -> EmptyState {
        EmptyState {
            title: "No versions found",
            hint: if self.is_searching() {
                "Try a different search term"
            } else {
                "Get started by creating products and versions"
            },
        }
    }
}
