//! Error types of the dataset crate.

use std::path::PathBuf;
use tch::TchError;
use thiserror::Error;

pub type Result<T, E = DatasetError> = std::result::Result<T, E>;

/// The errors raised by dataset construction and sample access.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Invalid split name, malformed directory layout or unusable schema.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// No image files under the scanned directory, or a file to be decoded is missing.
    #[error("no data found at '{}'", path.display())]
    NotFound { path: PathBuf },

    /// The decoder failed on the file content.
    #[error("failed to decode '{}'", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: TchError,
    },

    /// Sample index beyond the number of records.
    #[error("index {index} is out of range for dataset of size {len}")]
    Index { index: usize, len: usize },

    /// Label value that has no palette entry.
    #[error("label value {value} is out of palette range [0, {len})")]
    Range { value: i64, len: usize },

    #[error(transparent)]
    Tensor(#[from] TchError),

    /// The error returned by a user supplied transform.
    #[error(transparent)]
    Transform(#[from] anyhow::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DatasetError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
