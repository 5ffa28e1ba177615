use std::path::PathBuf;
use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Rule catalog {path:?} could not be read: {source}")]
    CatalogUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Rule catalog is inconsistent: {0}")]
    InconsistentCatalog(String),
}
