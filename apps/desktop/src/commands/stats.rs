//! Statistics commands.

use serde::Serialize;

use crate::db::WordRepository;
use crate::state::AppState;
use vocab_core::types::{Progress, WordStats};

use super::CommandError;

/// Home screen numbers, over active libraries only.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub stats: WordStats,
    pub total: usize,
    pub progress: Progress,
}

/// Get word statistics.
pub async fn get_overview(state: &AppState) -> Result<Overview, CommandError> {
    let repo = state.repo()?;
    let stats = repo.word_stats()?;
    let total = repo.total_count()?;

    Ok(Overview {
        stats,
        total,
        progress: Progress::from_stats(&stats, total),
    })
}

/// Wipe all learning progress and show the tutorial again.
pub async fn reset_progress(state: &AppState) -> Result<usize, CommandError> {
    let repo = state.repo()?;
    repo.reset_all().map_err(Into::into)
}
