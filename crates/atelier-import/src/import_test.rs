use super::*;

const BLM_HEADER: &str = "Blm-product-search src,Blm-product-search src 2,Product href,Slug,Title,Badge,Col,Sustainability,Price,Extra";

#[test]
fn rejects_empty_input() {
    let err = import_csv("").unwrap_err();
    assert!(matches!(err, ImportError::TooFewLines { found: 0 }));
}

#[test]
fn rejects_header_only() {
    let err = import_csv("name,price\n\n   \n").unwrap_err();
    assert!(matches!(err, ImportError::TooFewLines { found: 1 }));
}

#[test]
fn imports_blm_rows() {
    let csv = format!(
        "{BLM_HEADER}\nimg1.jpg,,https://x.com/products/foo/ABC123.html,foo-slug,Cool Shirt,New,,Eco,$49.99,\n"
    );
    let result = import_csv(&csv).unwrap();
    assert_eq!(result.format, Format::BlmProductSearch);
    assert_eq!(result.total_rows, 1);
    assert_eq!(result.skipped_rows, 0);

    let draft = &result.drafts[0];
    assert_eq!(draft.name, "Cool Shirt");
    assert_eq!(draft.price, "49.99");
    assert_eq!(draft.sku.as_deref(), Some("foo-slug"));
    assert_eq!(draft.image_url.as_deref(), Some("img1.jpg"));
    assert_eq!(
        draft.description.as_deref(),
        Some("Badge: New. Sustainability: Eco")
    );
    assert_eq!(draft.stock, 0);
}

#[test]
fn quoted_price_with_thousands_separator() {
    let csv = format!("{BLM_HEADER}\n,,,,Coat,,,,\"$1,250.00\",\n");
    let result = import_csv(&csv).unwrap();
    assert_eq!(result.drafts[0].price, "1250.00");
}

#[test]
fn skips_invalid_rows_and_counts_them() {
    let csv = "name,price\nTee,10\nBad,-5\nWorse,abc\n,3\nHat,0\n";
    let result = import_csv(csv).unwrap();
    assert_eq!(result.total_rows, 5);
    assert_eq!(result.skipped_rows, 3);
    let names: Vec<&str> = result.drafts.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Tee", "Hat"]);
}

#[test]
fn all_invalid_rows_is_an_error() {
    let err = import_csv("name,price\nBad,-5\nWorse,abc\n").unwrap_err();
    assert!(matches!(
        err,
        ImportError::NoValidProducts {
            total_rows: 2,
            skipped_rows: 2
        }
    ));
}

#[test]
fn blank_lines_are_not_rows() {
    let result = import_csv("name,price\r\n\r\nTee,10\r\n\r\n").unwrap();
    assert_eq!(result.total_rows, 1);
    assert_eq!(result.drafts[0].price, "10");
}

#[test]
fn byte_order_mark_does_not_break_detection() {
    let csv = "\u{feff}Tile-image src,Product-tile href,Product-tile,Value,Value 2,Description\nimg.jpg,https://x.com/p/123AB.html,Scarf,$20,,Silk\n";
    let result = import_csv(csv).unwrap();
    assert_eq!(result.format, Format::FashionTile);
    assert_eq!(result.drafts[0].sku.as_deref(), Some("123AB"));
}

#[test]
fn mapping_same_file_twice_is_identical() {
    let csv = "Name,Price,Colour\nTee,10,Navy\nTee,10,Navy\n";
    let first = import_csv(csv).unwrap();
    let second = import_csv(csv).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.drafts[0], first.drafts[1]);
}
