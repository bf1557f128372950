//! Free-form exports matched column by column on header names.

use super::{field, PartialDraft};
use crate::parse_helpers::{clean_price, non_empty, parse_leading_int};

/// Canonical product field a header maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Column {
    Name,
    Price,
    Description,
    ImageUrl,
    Category,
    Sku,
    Stock,
}

/// Classifies a header by case-insensitive substring, first match wins.
fn classify(header: &str) -> Option<Column> {
    let lower = header.to_lowercase();
    if lower.contains("name") {
        Some(Column::Name)
    } else if lower.contains("price") {
        Some(Column::Price)
    } else if lower.contains("description") {
        Some(Column::Description)
    } else if lower.contains("image") || lower.contains("url") {
        Some(Column::ImageUrl)
    } else if lower.contains("category") {
        Some(Column::Category)
    } else if lower.contains("sku") {
        Some(Column::Sku)
    } else if lower.contains("stock") {
        Some(Column::Stock)
    } else {
        None
    }
}

/// Later columns overwrite earlier ones mapped to the same field.
pub(super) fn map(headers: &[String], row: &[String]) -> PartialDraft {
    let mut draft = PartialDraft::default();

    for (idx, header) in headers.iter().enumerate() {
        let value = field(row, idx);
        match classify(header) {
            Some(Column::Name) => draft.name = Some(value.to_owned()),
            Some(Column::Price) => draft.price = Some(clean_price(value)),
            Some(Column::Description) => draft.description = non_empty(value),
            Some(Column::ImageUrl) => draft.image_url = non_empty(value),
            Some(Column::Category) => draft.category = non_empty(value),
            Some(Column::Sku) => draft.sku = non_empty(value),
            Some(Column::Stock) => draft.stock = parse_leading_int(value).unwrap_or(0),
            None if header.is_empty() => {}
            None => {
                draft.extra.insert(header.clone(), value.to_owned());
            }
        }
    }

    draft
}
