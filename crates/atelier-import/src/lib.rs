pub mod client;
pub mod detect;
pub mod error;
pub mod formats;
pub mod import;
pub mod importer;
pub(crate) mod parse_helpers;
pub mod template;
pub mod tokenize;
pub mod validate;

pub use client::CatalogClient;
pub use detect::{detect, Format};
pub use error::ImportError;
pub use formats::{map_row, PartialDraft};
pub use import::{import_csv, ImportResult};
pub use importer::{BulkImporter, ImportOutcome};
pub use template::TEMPLATE_CSV;
pub use tokenize::tokenize;
pub use validate::{validate, Rejection};
