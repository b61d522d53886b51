//! Commands exposed to the presentation layer.
//!
//! Each command locks the shared repository for its duration and converts
//! every failure into a serializable [`CommandError`].

pub mod import;
pub mod library;
pub mod settings;
pub mod stats;
pub mod study;

pub use import::import_file;
pub use library::{add_library, delete_library, list_libraries, set_library_active};
pub use settings::{get_setting, mark_tutorial_seen, set_setting, tutorial_status};
pub use stats::{get_overview, reset_progress, Overview};
pub use study::{
    reset_word, resolve_word, start_session, words_by_status, StatusListing, DETAIL_LIST_LIMIT,
};

use serde::{Deserialize, Serialize};
use vocab_core::SessionError;

use crate::db::DbError;
use crate::import::ImportError;
use crate::state::StateError;

/// Broad category of a command failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No words in any active library.
    NoWords,
    /// Words exist but none are new or under review.
    NothingToStudy,
    Session,
    NotFound,
    Import,
    Store,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    pub kind: ErrorKind,
    pub message: String,
}

impl CommandError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CommandError {}

impl From<DbError> for CommandError {
    fn from(e: DbError) -> Self {
        let kind = match e {
            DbError::LibraryNotFound(_) | DbError::WordNotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Store,
        };
        Self::new(kind, e.to_string())
    }
}

impl From<ImportError> for CommandError {
    fn from(e: ImportError) -> Self {
        Self::new(ErrorKind::Import, format!("import failed: {}", e))
    }
}

impl From<SessionError> for CommandError {
    fn from(e: SessionError) -> Self {
        let kind = match e {
            SessionError::NothingToStudy => ErrorKind::NothingToStudy,
            _ => ErrorKind::Session,
        };
        Self::new(kind, e.to_string())
    }
}

impl From<StateError> for CommandError {
    fn from(e: StateError) -> Self {
        Self::new(ErrorKind::Store, e.to_string())
    }
}
