//! Core vocabulary library shared by the store and its hosts.
//!
//! Provides:
//! - Word, library and status types
//! - Status-changing actions (Know, Unsure, Reset)
//! - In-memory study sessions and batch size coercion
//! - Bilingual row classification for tabular imports

pub mod error;
pub mod parser;
pub mod session;
pub mod transition;
pub mod types;

pub use error::{Result, SessionError, StatusError};
pub use parser::{classify_row, is_chinese, parse, ParsedRow, RowOutcome, SkipReason, SourceFormat};
pub use session::{batch_size, Resolution, StudyCard, StudySession, DEFAULT_BATCH_SIZE};
pub use transition::Action;
pub use types::{
    Library, LibrarySummary, Progress, QueryOrder, Status, ViewMode, Word, WordStats,
    DEFAULT_LIBRARY_ID, DEFAULT_LIBRARY_NAME, TUTORIAL_SEEN,
};
