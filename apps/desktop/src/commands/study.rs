//! Study session commands.

use serde::Serialize;
use tracing::debug;

use crate::db::WordRepository;
use crate::state::AppState;
use vocab_core::session::{batch_size, Resolution, StudySession};
use vocab_core::transition::Action;
use vocab_core::types::{QueryOrder, Status, Word};

use super::{CommandError, ErrorKind};

/// Maximum number of words returned by a status listing.
pub const DETAIL_LIST_LIMIT: usize = 200;

/// Words of one status, newest first, capped at [`DETAIL_LIST_LIMIT`].
#[derive(Debug, Clone, Serialize)]
pub struct StatusListing {
    pub status: Status,
    pub words: Vec<Word>,
    /// Number of matching words before the cap.
    pub total: usize,
}

/// Select a batch and start a study session.
///
/// `batch_input` is the raw size typed by the user; anything that is not a
/// positive integer falls back to the default. Fails with `NoWords` when no
/// active library holds any word, and with `NothingToStudy` when every word
/// is mastered.
pub async fn start_session(
    batch_input: Option<String>,
    state: &AppState,
) -> Result<StudySession, CommandError> {
    let limit = batch_input
        .as_deref()
        .map(batch_size)
        .unwrap_or(state.default_batch_size);

    let repo = state.repo()?;
    if repo.total_count()? == 0 {
        return Err(CommandError::new(
            ErrorKind::NoWords,
            "no words yet, add a library first",
        ));
    }

    let batch = repo.query_words(&Status::STUDYABLE, QueryOrder::Random, Some(limit))?;
    debug!(requested = limit, selected = batch.len(), "study batch selected");

    StudySession::new(batch).map_err(Into::into)
}

/// Apply Know or Unsure to a word of the session and count it as resolved.
///
/// The status is written before the session advances.
pub async fn resolve_word(
    session: &mut StudySession,
    word_id: i64,
    action: Action,
    state: &AppState,
) -> Result<Resolution, CommandError> {
    session.check(word_id, action)?;

    let repo = state.repo()?;
    repo.update_status(word_id, action.target())?;

    session.resolve(word_id, action).map_err(Into::into)
}

/// Put a word back into the pool of new words.
pub async fn reset_word(word_id: i64, state: &AppState) -> Result<(), CommandError> {
    let repo = state.repo()?;
    repo.update_status(word_id, Action::Reset.target())
        .map_err(Into::into)
}

/// List words with the given status in active libraries.
pub async fn words_by_status(
    status: Status,
    state: &AppState,
) -> Result<StatusListing, CommandError> {
    let repo = state.repo()?;
    let mut words = repo.words_by_status(status)?;
    let total = words.len();
    words.truncate(DETAIL_LIST_LIMIT);

    Ok(StatusListing {
        status,
        words,
        total,
    })
}
