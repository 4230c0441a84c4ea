//! Error types for digest computation
//!
//! Every failure is returned as an explicit, typed result. Nothing is
//! retried internally and nothing is silently swallowed; close failures
//! are the one exception and travel through the [`CloseErrorSink`]
//! side channel instead of competing with the primary result.
//!
//! [`CloseErrorSink`]: crate::sink::CloseErrorSink

use crate::algorithm::HashAlgorithm;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for digest operations
#[derive(Error, Debug)]
pub enum DigestError {
    /// Object path could not be opened for reading
    #[error("opening '{path}': {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// I/O error while streaming bytes through the hash state
    #[error("reading '{path}': {source}")]
    Read {
        /// Path being read when the error occurred
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Requested algorithm has no computation implementation
    #[error("hash function {0} is not supported")]
    UnsupportedAlgorithm(HashAlgorithm),
}

impl DigestError {
    /// Create an open failure with path context
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create a read failure with path context
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => Some(path),
            Self::UnsupportedAlgorithm(_) => None,
        }
    }
}

/// Result type alias for digest operations
pub type Result<T> = std::result::Result<T, DigestError>;
