use galaxy_table::TableError;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for `Result<T, UploadError>`.
pub type UploadResult<T> = Result<T, UploadError>;

#[derive(Debug, Error)]
pub enum UploadError {
    /// A manifest entry points at an image file that does not exist.
    #[error("missing subject image: {0}")]
    MissingSubjectFile(PathBuf),

    /// The platform no longer recognizes a previously-resolved subject
    /// set. The uploader re-resolves the set and retries the block once.
    #[error("subject set reference is stale")]
    StaleSetReference,

    /// Any other failure reported by the platform client.
    #[error("platform error: {0}")]
    Platform(String),

    /// A catalog row that cannot become a manifest entry.
    #[error("catalog row {row}: {message}")]
    BadCatalogRow { row: usize, message: String },

    #[error(transparent)]
    Table(#[from] TableError),
}

impl UploadError {
    pub(crate) fn bad_row(row: usize, message: impl Into<String>) -> Self {
        Self::BadCatalogRow {
            row,
            message: message.into(),
        }
    }
}
