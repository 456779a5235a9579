//! Products
//!
//! Wire model shared with the catalog backend. A product owns an append-only
//! list of versions; every create, edit and revert adds exactly one entry.

use std::cmp::{Ordering, Reverse};

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::ids::TypedId;

/// Product identifier
pub type ProductId = TypedId<Product>;

/// Product version identifier
pub type VersionId = TypedId<ProductVersion>;

/// Product as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Long-form description
    #[serde(default)]
    pub description: String,

    /// Non-negative price, currency-agnostic on the wire
    pub price: f64,

    /// Image reference or URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,

    /// Creation time, never changes
    pub created_at: Timestamp,

    /// Time of the most recent version
    pub updated_at: Timestamp,

    /// Version history in the order the backend recorded it
    #[serde(default, deserialize_with = "null_as_default")]
    pub versions: Vec<ProductVersion>,
}

/// Immutable record of one change to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVersion {
    /// Backend identifier
    pub id: VersionId,

    /// Owning product
    pub product_id: ProductId,

    /// Version label, treated as opaque text
    pub version_number: String,

    /// Free-text description of the change
    #[serde(default, deserialize_with = "null_as_default")]
    pub changes: String,

    /// Time the version was recorded
    pub created_at: Timestamp,

    /// Display name of the actor
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,

    /// Set when this version was produced by a revert
    #[serde(rename = "isRevert", default, skip_serializing_if = "Option::is_none")]
    pub revert: Option<bool>,

    /// Version number targeted by the revert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverted_from_version: Option<String>,
}

/// Current actor, shown in the UI and sent as `createdBy`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Optional avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// First letter of the display name, used as an avatar fallback.
    #[must_use]
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

/// A product payload that breaks one of the model invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductIssue {
    /// The product has no versions at all.
    NoVersions,

    /// `updatedAt` differs from the newest version's `createdAt`.
    StaleUpdatedAt {
        /// Value carried by the product
        updated_at: Timestamp,
        /// Creation time of the newest version
        latest_version_at: Timestamp,
    },

    /// A revert version does not name the version it reverted to.
    RevertWithoutTarget(VersionId),
}

impl Product {
    /// Newest version: greatest `createdAt`, later entries winning ties.
    #[must_use]
    pub fn latest_version(&self) -> Option<&ProductVersion> {
        self.versions
            .iter()
            .reduce(|latest, version| match version.created_at.cmp(&latest.created_at) {
                Ordering::Less => latest,
                Ordering::Equal | Ordering::Greater => version,
            })
    }

    /// Versions ordered newest first, later entries winning ties so the head
    /// is always [`Self::latest_version`].
    #[must_use]
    pub fn versions_newest_first(&self) -> Vec<&ProductVersion> {
        let mut versions: Vec<&ProductVersion> = self.versions.iter().rev().collect();

        versions.sort_by_key(|version| Reverse(version.created_at));

        versions
    }

    /// Look up one of this product's versions.
    #[must_use]
    pub fn version(&self, id: &VersionId) -> Option<&ProductVersion> {
        self.versions.iter().find(|version| version.id == *id)
    }

    /// Number of recorded versions.
    #[must_use]
    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    /// Number of versions produced by reverts.
    #[must_use]
    pub fn revert_count(&self) -> usize {
        self.versions.iter().filter(|v| v.is_revert()).count()
    }

    /// Case-insensitive match on name or description.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Invariant violations carried by this payload.
    #[must_use]
    pub fn issues(&self) -> SmallVec<[ProductIssue; 3]> {
        let mut issues = SmallVec::new();

        match self.latest_version() {
            None => issues.push(ProductIssue::NoVersions),
            Some(latest) if latest.created_at != self.updated_at => {
                issues.push(ProductIssue::StaleUpdatedAt {
                    updated_at: self.updated_at,
                    latest_version_at: latest.created_at,
                });
            }
            Some(_) => {}
        }

        issues.extend(
            self.versions
                .iter()
                .filter(|v| v.is_revert() && v.reverted_from_version.is_none())
                .map(|v| ProductIssue::RevertWithoutTarget(v.id.clone())),
        );

        issues
    }
}

impl ProductVersion {
    /// Whether this version was produced by a revert.
    #[must_use]
    pub fn is_revert(&self) -> bool {
        self.revert == Some(true)
    }

    /// "Reverted from vX" label for revert entries.
    #[must_use]
    pub fn lineage(&self) -> Option<String> {
        if !self.is_revert() {
            return None;
        }

        Some(format!(
            "Reverted from {}",
            self.reverted_from_version.as_deref().unwrap_or("unknown version")
        ))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn product_json() -> serde_json::Value {
        json!({
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
                    "changes": "Reverted to 1.0.0",
                    "createdAt": "2025-04-02T14:45:00Z",
                    "createdBy": "System",
                    "isRevert": true,
                    "revertedFromVersion": "1.0.0"
                }
            ]
        })
    }

    #[test]
    fn decodes_camel_case_payload() -> TestResult {
        let product: Product = serde_json::from_value(product_json())?;

        let [first, second] = product.versions.as_slice() else {
            return Err("expected two versions".into());
        };

        assert_eq!(product.id.as_str(), "1");
        assert!(!first.is_revert(), "initial version is not a revert");
        assert!(second.is_revert(), "second version is a revert");
        assert_eq!(second.reverted_from_version.as_deref(), Some("1.0.0"));

        Ok(())
    }

    #[test]
    fn null_versions_decode_as_empty() -> TestResult {
        let mut value = product_json();
        value
            .as_object_mut()
            .ok_or("expected an object")?
            .insert("versions".to_string(), serde_json::Value::Null);

        let product: Product = serde_json::from_value(value)?;

        assert!(product.versions.is_empty(), "null versions should be empty");
        assert_eq!(product.issues().as_slice(), &[ProductIssue::NoVersions]);

        Ok(())
    }

    #[test]
    fn latest_version_prefers_later_entry_on_equal_timestamps() -> TestResult {
        let mut product: Product = serde_json::from_value(product_json())?;
        let tie = product.updated_at;

        for version in &mut product.versions {
            version.created_at = tie;
        }

        let latest = product.latest_version().map(|v| v.id.as_str());

        assert_eq!(latest, Some("v2"));

        Ok(())
    }

    #[test]
    fn consistent_product_has_no_issues() -> TestResult {
        let product: Product = serde_json::from_value(product_json())?;

        assert!(product.issues().is_empty(), "expected no issues");

        Ok(())
    }

    #[test]
    fn reports_stale_updated_at_and_untargeted_revert() -> TestResult {
        let mut product: Product = serde_json::from_value(product_json())?;
        product.updated_at = "2025-05-01T00:00:00Z".parse()?;

        let revert = product
            .versions
            .last_mut()
            .ok_or("expected a revert version")?;
        revert.reverted_from_version = None;

        let issues = product.issues();

        let [stale, untargeted] = issues.as_slice() else {
            return Err(format!("expected two issues, got {issues:?}").into());
        };

        assert!(
            matches!(stale, ProductIssue::StaleUpdatedAt { .. }),
            "expected stale updatedAt, got {stale:?}"
        );
        assert_eq!(
            untargeted,
            &ProductIssue::RevertWithoutTarget(VersionId::new("v2"))
        );

        Ok(())
    }

    #[test]
    fn lineage_label_only_for_reverts() -> TestResult {
        let product: Product = serde_json::from_value(product_json())?;

        let labels: Vec<Option<String>> =
            product.versions.iter().map(ProductVersion::lineage).collect();

        assert_eq!(labels, [None, Some("Reverted from 1.0.0".to_string())]);

        Ok(())
    }

    #[test]
    fn versions_newest_first_orders_by_created_at() -> TestResult {
        let product: Product = serde_json::from_value(product_json())?;

        let ids: Vec<&str> = product
            .versions_newest_first()
            .iter()
            .map(|v| v.id.as_str())
            .collect();

        assert_eq!(ids, ["v2", "v1"]);

        Ok(())
    }

    #[test]
    fn history_head_matches_latest_on_equal_timestamps() -> TestResult {
        let mut product: Product = serde_json::from_value(product_json())?;
        let tie = product.versions.first().ok_or("expected a version")?.created_at;

        for version in &mut product.versions {
            version.created_at = tie;
        }

        let latest = product.latest_version().map(|v| v.version_number.as_str());
        let head = product
            .versions_newest_first()
            .into_iter()
            .next()
            .map(|v| v.version_number.as_str());

        assert_eq!(latest, Some("1.1.0"));
        assert_eq!(head, latest, "history head should be the current version");

        Ok(())
    }

    #[test]
    fn user_initial_is_uppercased() {
        let user = User {
            id: "u1".to_string(),
            name: "admin".to_string(),
            email: "admin@example.com".to_string(),
            avatar: None,
        };

        assert_eq!(user.initial(), Some('A'));
    }
}
