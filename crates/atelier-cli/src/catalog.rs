//! Command handlers for catalog CSV import.

use std::path::Path;

use anyhow::Context;
use atelier_import::{BulkImporter, CatalogClient, ImportOutcome, ImportResult};

/// Import `file` and report what the backend created.
///
/// A partial success prints a warning with each backend error and still
/// exits successfully.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed into at least one
/// valid product, or if the upload fails.
pub(crate) async fn run_import(config: &atelier_core::AppConfig, file: &Path) -> anyhow::Result<()> {
    let client = CatalogClient::new(config)?;
    tracing::info!(file = %file.display(), endpoint = %client.endpoint(), "starting catalog import");

    let importer = BulkImporter::new(client);
    let outcome = importer
        .import_file(file)
        .await
        .with_context(|| format!("import of {} failed", file.display()))?;

    for line in outcome_lines(&outcome) {
        println!("{line}");
    }
    Ok(())
}

/// Parse `file` and print the drafts as JSON without contacting the backend.
///
/// # Errors
///
/// Returns an error if the file cannot be read or yields no valid products.
pub(crate) async fn run_preview(file: &Path) -> anyhow::Result<()> {
    let raw = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let result = atelier_import::import_csv(&raw)?;

    println!("{}", serde_json::to_string_pretty(&result.drafts)?);
    println!("{}", summary_line(&result));
    Ok(())
}

/// Write the template CSV to `output`, or stdout when `None`.
///
/// # Errors
///
/// Returns an error if `output` cannot be written.
pub(crate) async fn run_template(output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, atelier_import::TEMPLATE_CSV)
                .await
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote template to {}", path.display());
        }
        None => print!("{}", atelier_import::TEMPLATE_CSV),
    }
    Ok(())
}

pub(crate) fn summary_line(result: &ImportResult) -> String {
    format!(
        "{} format: {} of {} rows valid, {} skipped",
        result.format,
        result.drafts.len(),
        result.total_rows,
        result.skipped_rows
    )
}

pub(crate) fn outcome_lines(outcome: &ImportOutcome) -> Vec<String> {
    let mut lines = vec![
        summary_line(&outcome.result),
        format!("created {} products", outcome.response.created),
    ];
    if outcome.is_partial() {
        lines.push(format!(
            "warning: {} products failed to import",
            outcome.response.failed
        ));
        lines.extend(
            outcome
                .response
                .error_messages()
                .map(|message| format!("  - {message}")),
        );
    }
    lines
}
