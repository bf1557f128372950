//! Product tile exports: image, product URL, name, display price, numeric
//! price, description.

use std::sync::LazyLock;

use regex::Regex;

use super::{field, PartialDraft};
use crate::parse_helpers::{clean_price, non_empty};

/// Style number at the end of a product URL, e.g. `/1316169WYM.html`.
static STYLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+[A-Z]+)\.html").expect("valid style number regex"));

pub(super) fn map(row: &[String]) -> PartialDraft {
    let price = match field(row, 4) {
        "" => field(row, 3).replace('$', ""),
        numeric => numeric.to_owned(),
    };

    PartialDraft {
        name: Some(field(row, 2).to_owned()),
        price: Some(clean_price(&price)),
        description: non_empty(field(row, 5)),
        image_url: non_empty(field(row, 0)),
        category: None,
        sku: style_number(field(row, 1)),
        stock: 0,
        ..PartialDraft::default()
    }
}

fn style_number(product_url: &str) -> Option<String> {
    STYLE_NUMBER
        .captures(product_url)
        .map(|caps| caps[1].to_owned())
}
