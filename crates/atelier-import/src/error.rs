use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV file must have a header row and at least one data row (found {found} non-blank lines)")]
    TooFewLines { found: usize },

    #[error("no valid products found in CSV ({skipped_rows} of {total_rows} rows skipped)")]
    NoValidProducts {
        total_rows: usize,
        skipped_rows: usize,
    },

    #[error("an import is already in progress")]
    Busy,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("bulk create failed with HTTP {status}: {message}")]
    Endpoint { status: u16, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },
}
