//! Promotes a [`PartialDraft`] to a [`ProductDraft`] once required fields check out.

use atelier_core::ProductDraft;
use thiserror::Error;

use crate::formats::PartialDraft;
use crate::parse_helpers::parse_leading_float;

/// Why a row was dropped from the batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("missing product name")]
    MissingName,

    #[error("missing price")]
    MissingPrice,

    #[error("price \"{0}\" is not a number")]
    InvalidPrice(String),

    #[error("price \"{0}\" is negative")]
    NegativePrice(String),
}

/// Checks that `name` is non-blank and `price` is a finite number `>= 0`.
///
/// The accepted price keeps its cleaned text form; it is not reformatted.
///
/// # Errors
///
/// Returns the first [`Rejection`] found, checking name before price.
pub fn validate(draft: PartialDraft) -> Result<ProductDraft, Rejection> {
    let name = draft
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(Rejection::MissingName)?
        .to_owned();

    let price = draft
        .price
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or(Rejection::MissingPrice)?
        .to_owned();

    match parse_leading_float(&price) {
        Some(value) if !value.is_finite() => return Err(Rejection::InvalidPrice(price)),
        Some(value) if value < 0.0 => return Err(Rejection::NegativePrice(price)),
        Some(_) => {}
        None => return Err(Rejection::InvalidPrice(price)),
    }

    Ok(ProductDraft {
        name,
        price,
        description: draft.description,
        image_url: draft.image_url,
        category: draft.category,
        sku: draft.sku,
        stock: draft.stock,
        extra: draft.extra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(name: &str, price: &str) -> PartialDraft {
        PartialDraft {
            name: Some(name.to_owned()),
            price: Some(price.to_owned()),
            ..PartialDraft::default()
        }
    }

    #[test]
    fn accepts_valid_draft() {
        let draft = validate(partial("Tee", "19.90")).unwrap();
        assert_eq!(draft.name, "Tee");
        assert_eq!(draft.price, "19.90");
        assert_eq!(draft.stock, 0);
    }

    #[test]
    fn accepts_zero_price() {
        assert!(validate(partial("Sample", "0")).is_ok());
    }

    #[test]
    fn keeps_price_text_with_trailing_garbage() {
        let draft = validate(partial("Tee", "12abc")).unwrap();
        assert_eq!(draft.price, "12abc");
    }

    #[test]
    fn trims_name() {
        let draft = validate(partial("  Tee ", "5")).unwrap();
        assert_eq!(draft.name, "Tee");
    }

    #[test]
    fn rejects_missing_or_blank_name() {
        assert_eq!(
            validate(partial("   ", "5")).unwrap_err(),
            Rejection::MissingName
        );
        let mut draft = partial("x", "5");
        draft.name = None;
        assert_eq!(validate(draft).unwrap_err(), Rejection::MissingName);
    }

    #[test]
    fn rejects_missing_price() {
        assert_eq!(
            validate(partial("Tee", "")).unwrap_err(),
            Rejection::MissingPrice
        );
        let mut draft = partial("Tee", "5");
        draft.price = None;
        assert_eq!(validate(draft).unwrap_err(), Rejection::MissingPrice);
    }

    #[test]
    fn rejects_negative_price() {
        assert_eq!(
            validate(partial("Tee", "-5")).unwrap_err(),
            Rejection::NegativePrice("-5".to_owned())
        );
    }

    #[test]
    fn rejects_non_numeric_price() {
        assert_eq!(
            validate(partial("Tee", "abc")).unwrap_err(),
            Rejection::InvalidPrice("abc".to_owned())
        );
    }

    #[test]
    fn rejects_infinite_price() {
        assert!(matches!(
            validate(partial("Tee", "Infinity")),
            Err(Rejection::InvalidPrice(_))
        ));
    }
}
