//! Error types for vocab-core.

use thiserror::Error;

/// Errors raised while decoding a stored status.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    #[error("invalid status code: {0}")]
    InvalidCode(i64),
}

/// Errors raised by an in-memory study session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no words to study")]
    NothingToStudy,

    #[error("word {0} is not part of this session")]
    UnknownWord(i64),

    #[error("word {0} was already resolved")]
    AlreadyResolved(i64),

    #[error("session is already complete")]
    Complete,

    #[error("{0:?} does not resolve a session word")]
    NotResolving(crate::transition::Action),
}

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;
