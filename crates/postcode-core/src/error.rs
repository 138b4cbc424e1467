// crates/postcode-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building, caching or exporting a [`PostcodeDb`].
///
/// Only construction and I/O can fail. A postcode or city that is not in the
/// dataset is an ordinary `None` result, never an error.
///
/// [`PostcodeDb`]: crate::PostcodeDb
#[derive(Debug, Error)]
pub enum PostcodeError {
    #[error("Data path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("No .json files found in: {}", .0.display())]
    NoDataFiles(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl PostcodeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PostcodeError::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` for the errors that abort a dataset load.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            PostcodeError::PathNotFound(_)
                | PostcodeError::NoDataFiles(_)
                | PostcodeError::Io { .. }
                | PostcodeError::Json { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PostcodeError>;
