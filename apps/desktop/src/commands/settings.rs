//! Settings commands.

use crate::db::SettingsRepository;
use crate::state::AppState;
use vocab_core::TUTORIAL_SEEN;

use super::CommandError;

/// Get a setting value.
pub async fn get_setting(key: String, state: &AppState) -> Result<Option<String>, CommandError> {
    let repo = state.repo()?;
    repo.get_setting(&key).map_err(Into::into)
}

/// Set a setting value.
pub async fn set_setting(key: String, value: String, state: &AppState) -> Result<(), CommandError> {
    let repo = state.repo()?;
    repo.set_setting(&key, &value).map_err(Into::into)
}

/// Whether the study tutorial still has to be shown.
pub async fn tutorial_status(state: &AppState) -> Result<bool, CommandError> {
    let repo = state.repo()?;
    let seen = repo.get_setting(TUTORIAL_SEEN)?;
    Ok(seen.as_deref() != Some("1"))
}

/// Record that the tutorial was dismissed for good.
pub async fn mark_tutorial_seen(state: &AppState) -> Result<(), CommandError> {
    let repo = state.repo()?;
    repo.set_setting(TUTORIAL_SEEN, "1").map_err(Into::into)
}
