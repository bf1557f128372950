//! Numeric and string cleanup shared by the format mappers and the validator.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("valid leading float regex")
});

static LEADING_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?\d+").expect("valid leading int regex"));

/// Removes currency symbols and thousands separators, e.g. `" $1,299.00 "` → `"1299.00"`.
#[must_use]
pub(crate) fn clean_price(raw: &str) -> String {
    raw.replace(['$', ','], "").trim().to_owned()
}

/// Parses the longest numeric prefix of `raw` after leading whitespace.
///
/// `"12.50"` → `12.5`, `"12abc"` → `12.0`, `"abc"` → `None`. `"Infinity"` is
/// recognized and returned as `f64::INFINITY` so callers can reject it
/// explicitly.
#[must_use]
pub(crate) fn parse_leading_float(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let matched = LEADING_FLOAT.find(text)?.as_str();
    match matched.trim_start_matches(['+', '-']) {
        "Infinity" if matched.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => matched.parse::<f64>().ok(),
    }
}

/// Parses the leading integer of `raw`; `"12 units"` → `12`.
#[must_use]
pub(crate) fn parse_leading_int(raw: &str) -> Option<i64> {
    let text = raw.trim_start();
    LEADING_INT.find(text)?.as_str().parse::<i64>().ok()
}

/// Treats an empty string as absent.
#[must_use]
pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}
