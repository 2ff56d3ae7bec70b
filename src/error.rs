//! Error types for word list filtering

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a filter run
#[derive(Error, Debug)]
pub enum FilterError {
    /// Source word list missing or unreadable
    #[error("Failed to read word list {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination could not be created or written
    #[error("Failed to write filtered words to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FilterError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }

    /// Path the failed operation was working on
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
