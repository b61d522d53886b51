//! Import error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::db::DbError;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("unsupported file type: {} (expected csv, xlsx or xls)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file too large: {} ({size} bytes, max {max_size})", .path.display())]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    #[error("could not decode {} as UTF-8 or GBK", .path.display())]
    Decode { path: PathBuf },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read spreadsheet {}: {message}", .path.display())]
    Spreadsheet { path: PathBuf, message: String },

    #[error(transparent)]
    Db(#[from] DbError),
}

impl ImportError {
    /// The file could not be opened or is not an accepted type.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedFormat { .. }
                | Self::FileNotFound { .. }
                | Self::Io { .. }
                | Self::FileTooLarge { .. }
        )
    }

    /// The file was read but its contents could not be decoded or parsed.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Self::Decode { .. } | Self::Csv { .. } | Self::Spreadsheet { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
