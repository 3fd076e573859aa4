use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Timestamp layout accepted for the range bounds
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors that abort a filter-and-copy request.
///
/// Per-file copy failures are not represented here: they are counted as
/// skipped files and never abort the batch.
#[derive(Debug, Error)]
pub enum FilterCopyError {
    #[error("Invalid timestamp format for '{value}'. Use 'YYYY-MM-DD HH:MM:SS'")]
    InvalidTimestamp { value: String },

    #[error("No valid file formats provided")]
    EmptyFormatList,

    #[error("Source folder does not exist or is not a directory: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Destination base folder does not exist: {}", path.display())]
    DestinationBaseNotFound { path: PathBuf },

    #[error("Failed to read file metadata for {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create destination folder {}: {source}", path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FilterCopyError {
    /// True for errors caused by the caller's input rather than the environment
    pub fn is_client_error(&self) -> bool {
        !matches!(self, FilterCopyError::CreateDestination { .. })
    }
}

pub type Result<T> = std::result::Result<T, FilterCopyError>;
