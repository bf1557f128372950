//! Per-format field mapping from a tokenized data row to a [`PartialDraft`].
//!
//! Mappers never fail: missing columns read as empty strings, and whether the
//! result is usable is decided later by [`crate::validate`].

mod blm;
mod fashion_tile;
mod legacy;

use std::collections::BTreeMap;

use crate::detect::Format;

/// Product fields as read from one row, before required fields are checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialDraft {
    pub name: Option<String>,
    /// Already stripped of `$` and `,`.
    pub price: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub sku: Option<String>,
    pub stock: i64,
    /// Legacy columns that match no product field, keyed by header text.
    pub extra: BTreeMap<String, String>,
}

/// Maps one data row according to the detected `format`.
#[must_use]
pub fn map_row(format: &Format, row: &[String]) -> PartialDraft {
    match format {
        Format::BlmProductSearch => blm::map(row),
        Format::FashionTile => fashion_tile::map(row),
        Format::Legacy { headers } => legacy::map(headers, row),
    }
}

/// Field at `idx`, or `""` when the row is shorter than the layout.
fn field(row: &[String], idx: usize) -> &str {
    row.get(idx).map_or("", String::as_str)
}
