//! Classifies a CSV export by its header row.
//!
//! Vendor exports carry no schema tag, so the header text is the only signal.
//! Checks run in a fixed order and the first match wins.

use std::fmt;

/// Column layout of an uploaded CSV file, fixed once per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    /// Scraper export of a product search grid: image, alt image, product
    /// URL, slug, title, badge, _, sustainability, price.
    BlmProductSearch,
    /// Scraper export of product tiles: image, product URL, name, display
    /// price, numeric price, description.
    FashionTile,
    /// Any other layout. Columns are matched to product fields by header
    /// name, so the header row is kept.
    Legacy { headers: Vec<String> },
}

impl Format {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Format::BlmProductSearch => "blm-product-search",
            Format::FashionTile => "fashion-tile",
            Format::Legacy { .. } => "legacy",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detects the export format from the tokenized header row.
///
/// Substring checks are case-sensitive.
#[must_use]
pub fn detect(header: &[String]) -> Format {
    if is_blm_product_search(header) {
        Format::BlmProductSearch
    } else if is_fashion_tile(header) {
        Format::FashionTile
    } else {
        Format::Legacy {
            headers: header.to_vec(),
        }
    }
}

fn is_blm_product_search(header: &[String]) -> bool {
    header.len() >= 9
        && (header[0].contains("Blm-product-search")
            || header[4].contains("Title")
            || header[8].contains("Price"))
}

fn is_fashion_tile(header: &[String]) -> bool {
    header.len() >= 6
        && (header[0].contains("Tile-image")
            || header[1].contains("Product-tile")
            || header[2].contains("Product-tile")
            || header[5].contains("Description"))
}
