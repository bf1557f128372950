//! Product records exchanged with the back-office catalog backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A validated, unpersisted product ready for bulk creation.
///
/// Serialized with camelCase keys because the catalog backend consumes the
/// same JSON shape its admin UI sends (`imageUrl`, not `image_url`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Display name. Never empty after trimming.
    pub name: String,
    /// Price as a cleaned decimal string, e.g. `"49.99"`. Kept as text so the
    /// source formatting survives; always parses to a finite value `>= 0`.
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(default)]
    pub stock: i64,
    /// Columns from free-form CSV exports that have no canonical field,
    /// keyed by their literal header text.
    #[serde(flatten, default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

/// Request body for the bulk creation endpoint.
#[derive(Debug, Serialize)]
pub struct BulkCreateRequest<'a> {
    pub products: &'a [ProductDraft],
}

/// Response from the bulk creation endpoint.
///
/// Returned with HTTP 200 when every product was created and HTTP 207 when
/// some failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BulkCreateResponse {
    #[serde(default)]
    pub created: u64,
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub errors: Vec<BulkCreateError>,
}

impl BulkCreateResponse {
    /// Returns `true` when the backend rejected at least one product.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.failed > 0
    }

    /// Per-item error messages in the order the backend reported them.
    pub fn error_messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.error.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulkCreateError {
    pub error: String,
}
