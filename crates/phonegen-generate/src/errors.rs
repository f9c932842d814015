use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors emitted while generating or persisting phone numbers.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Config(#[from] phonegen_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected csv header in {}: {found:?}", path.display())]
    UnexpectedHeader { path: PathBuf, found: Vec<String> },
}

/// Coarse classification of a [`GenerationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidConfiguration,
    CapacityExceeded,
    IoFailure,
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::Config(phonegen_core::Error::InvalidConfiguration(_)) => {
                ErrorKind::InvalidConfiguration
            }
            GenerationError::Config(phonegen_core::Error::CapacityExceeded { .. }) => {
                ErrorKind::CapacityExceeded
            }
            GenerationError::Io(_)
            | GenerationError::Write { .. }
            | GenerationError::Csv(_)
            | GenerationError::Json(_)
            | GenerationError::UnexpectedHeader { .. } => ErrorKind::IoFailure,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        GenerationError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach the destination path to I/O failures raised while writing it.
    pub(crate) fn at_path(self, path: &Path) -> Self {
        match self {
            GenerationError::Io(source) => GenerationError::write(path, source),
            GenerationError::Csv(err) if err.is_io_error() => GenerationError::write(path, std::io::Error::other(err)),
            other => other,
        }
    }
}
