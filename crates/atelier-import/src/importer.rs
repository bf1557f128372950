//! Parse-then-submit driver with a single in-flight import at a time.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use atelier_core::BulkCreateResponse;

use crate::client::CatalogClient;
use crate::error::ImportError;
use crate::import::{import_csv, ImportResult};

/// Local parse summary plus the backend's creation report.
#[derive(Debug)]
pub struct ImportOutcome {
    pub result: ImportResult,
    pub response: BulkCreateResponse,
}

impl ImportOutcome {
    /// `true` when the backend created some products but rejected others.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.response.is_partial()
    }
}

/// Runs imports against one [`CatalogClient`], refusing to start a new import
/// while another is still in flight. An in-flight import cannot be aborted.
pub struct BulkImporter {
    client: CatalogClient,
    busy: AtomicBool,
}

/// Clears the busy flag when dropped, on success and error paths alike.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl BulkImporter {
    #[must_use]
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            busy: AtomicBool::new(false),
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    fn acquire(&self) -> Result<BusyGuard<'_>, ImportError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ImportError::Busy)?;
        Ok(BusyGuard(&self.busy))
    }

    /// Reads `path` as UTF-8 text and imports it.
    ///
    /// # Errors
    ///
    /// [`ImportError::Io`] if the file cannot be read, otherwise the same
    /// errors as [`BulkImporter::import_text`].
    pub async fn import_file(&self, path: &Path) -> Result<ImportOutcome, ImportError> {
        let _guard = self.acquire()?;
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ImportError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        self.run(&raw).await
    }

    /// Parses `raw` and submits the accepted drafts.
    ///
    /// Nothing is sent when the file is structurally invalid or has no valid
    /// rows.
    ///
    /// # Errors
    ///
    /// - [`ImportError::Busy`] if another import is in flight.
    /// - [`ImportError::TooFewLines`] / [`ImportError::NoValidProducts`] from parsing.
    /// - Any [`CatalogClient::create_products`] error.
    pub async fn import_text(&self, raw: &str) -> Result<ImportOutcome, ImportError> {
        let _guard = self.acquire()?;
        self.run(raw).await
    }

    async fn run(&self, raw: &str) -> Result<ImportOutcome, ImportError> {
        let result = import_csv(raw)?;
        let response = self.client.create_products(&result.drafts).await?;

        if response.is_partial() {
            tracing::warn!(
                created = response.created,
                failed = response.failed,
                errors = ?response.error_messages().collect::<Vec<_>>(),
                "bulk create partially succeeded"
            );
        } else {
            tracing::info!(created = response.created, "bulk create succeeded");
        }

        Ok(ImportOutcome { result, response })
    }
}
