//! Splits one CSV line into trimmed fields.
//!
//! This is a per-line scanner, not a full RFC 4180 reader: a quoted field
//! cannot span lines, and an unterminated quote simply swallows the rest of
//! the line into the last field instead of raising an error.

/// Splits `line` on unquoted commas, trimming each field.
///
/// - `"` toggles quoting; `""` inside a quoted field yields a literal `"`.
/// - Blank fields are kept as empty strings so column positions survive.
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                result.push(current.trim().to_owned());
                current.clear();
            }
            other => current.push(other),
        }
    }
    result.push(current.trim().to_owned());

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields_and_trims() {
        assert_eq!(tokenize("a, b ,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn unquoted_join_round_trips() {
        let fields = ["Cool Shirt", "49.99", "", "https://x.com/a.jpg", "SKU-1"];
        assert_eq!(tokenize(&fields.join(",")), fields);
    }

    #[test]
    fn quoted_field_keeps_commas() {
        assert_eq!(tokenize(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn doubled_quote_is_literal() {
        assert_eq!(tokenize(r#""a""b",c"#), vec![r#"a"b"#, "c"]);
    }

    #[test]
    fn empty_fields_preserve_position() {
        assert_eq!(tokenize(",,x,"), vec!["", "", "x", ""]);
    }

    #[test]
    fn empty_line_is_single_empty_field() {
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn unterminated_quote_is_tolerated() {
        assert_eq!(tokenize(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn quotes_mid_field_toggle_without_emitting() {
        assert_eq!(tokenize(r#"5" tall,x"#), vec![r"5 tall,x"]);
    }
}
