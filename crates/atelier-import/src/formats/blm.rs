//! Product search grid exports.
//!
//! | idx | column |
//! |-----|--------|
//! | 0 | primary image |
//! | 1 | fallback image |
//! | 2 | product page URL |
//! | 3 | product slug |
//! | 4 | title |
//! | 5 | badge |
//! | 7 | sustainability label |
//! | 8 | display price |

use super::{field, PartialDraft};
use crate::parse_helpers::{clean_price, non_empty};

pub(super) fn map(row: &[String]) -> PartialDraft {
    let image = match field(row, 0) {
        "" => field(row, 1),
        primary => primary,
    };
    let product_url = field(row, 2);

    let sku = non_empty(field(row, 3)).or_else(|| sku_from_url(product_url));

    // The URL's category segment is not a reliable catalog category, so
    // category stays unset.
    PartialDraft {
        name: Some(field(row, 4).to_owned()),
        price: Some(clean_price(field(row, 8))),
        description: badge_description(field(row, 5), field(row, 7)),
        image_url: non_empty(image),
        category: None,
        sku,
        stock: 0,
        ..PartialDraft::default()
    }
}

/// Last path segment of the product URL without its `.html` suffix.
fn sku_from_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or(path);
    non_empty(segment.strip_suffix(".html").unwrap_or(segment))
}

fn badge_description(badge: &str, sustainability: &str) -> Option<String> {
    let mut parts = Vec::with_capacity(2);
    if !badge.is_empty() {
        parts.push(format!("Badge: {badge}"));
    }
    if !sustainability.is_empty() {
        parts.push(format!("Sustainability: {sustainability}"));
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(". "))
    }
}
