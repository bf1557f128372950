//! Whole-file pipeline: tokenize, detect, map, validate.

use atelier_core::ProductDraft;

use crate::detect::{detect, Format};
use crate::error::ImportError;
use crate::formats::map_row;
use crate::tokenize::tokenize;
use crate::validate::validate;

/// Outcome of parsing one uploaded file.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportResult {
    pub format: Format,
    pub drafts: Vec<ProductDraft>,
    /// Non-blank data lines, header excluded.
    pub total_rows: usize,
    pub skipped_rows: usize,
}

/// Parses raw CSV text into a batch of validated product drafts.
///
/// Blank lines are ignored. Rows that fail validation are counted in
/// `skipped_rows` and logged at debug level with their 1-based line number;
/// they never abort the import.
///
/// # Errors
///
/// - [`ImportError::TooFewLines`] when there is no header plus data row.
/// - [`ImportError::NoValidProducts`] when every data row was rejected.
pub fn import_csv(raw: &str) -> Result<ImportResult, ImportError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let lines: Vec<(usize, &str)> = raw
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
        .collect();

    let Some((&(_, header_line), data_lines)) = lines.split_first() else {
        return Err(ImportError::TooFewLines { found: 0 });
    };
    if data_lines.is_empty() {
        return Err(ImportError::TooFewLines { found: 1 });
    }

    let format = detect(&tokenize(header_line));
    tracing::info!(format = %format, rows = data_lines.len(), "detected CSV format");

    let mut drafts = Vec::with_capacity(data_lines.len());
    let mut skipped_rows = 0usize;

    for &(line_no, line) in data_lines {
        match validate(map_row(&format, &tokenize(line))) {
            Ok(draft) => drafts.push(draft),
            Err(reason) => {
                skipped_rows += 1;
                tracing::debug!(line = line_no, %reason, "skipping CSV row");
            }
        }
    }

    let total_rows = data_lines.len();
    if drafts.is_empty() {
        return Err(ImportError::NoValidProducts {
            total_rows,
            skipped_rows,
        });
    }

    tracing::info!(
        accepted = drafts.len(),
        skipped = skipped_rows,
        "parsed CSV import"
    );

    Ok(ImportResult {
        format,
        drafts,
        total_rows,
        skipped_rows,
    })
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
