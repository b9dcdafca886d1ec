//! Error types for vizdims.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Every variant except `Clipboard` is a data load failure: the
//! viewer cannot start without a dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vizdims operations.
pub type Result<T> = std::result::Result<T, VizError>;

/// Errors that can occur in vizdims.
#[derive(Debug, Error)]
pub enum VizError {
    /// Failed to open the data file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        /// Path that could not be opened.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV or a row that does not fit the record layout.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A publish date that could not be parsed.
    #[error("Invalid publish_date on line {line}: {value:?}")]
    InvalidDate {
        /// 1-based line number in the source file.
        line: u64,
        /// Raw cell contents.
        value: String,
    },

    /// Two records share a title.
    #[error("Duplicate title: {title:?}")]
    DuplicateTitle {
        /// The repeated title.
        title: String,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl VizError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create an InvalidDate error.
    pub fn invalid_date(line: u64, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            line,
            value: value.into(),
        }
    }

    /// Create a DuplicateTitle error.
    pub fn duplicate_title(title: impl Into<String>) -> Self {
        Self::DuplicateTitle {
            title: title.into(),
        }
    }

    /// Whether this error means the dataset could not be loaded.
    pub fn is_data_load_failure(&self) -> bool {
        matches!(
            self,
            Self::FileOpen { .. }
                | Self::Csv(_)
                | Self::InvalidDate { .. }
                | Self::DuplicateTitle { .. }
        )
    }
}
