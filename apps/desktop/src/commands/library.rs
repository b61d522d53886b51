//! Library-related commands.

use crate::db::LibraryRepository;
use crate::state::AppState;
use vocab_core::types::LibrarySummary;

use super::CommandError;

/// List all libraries with their word counts.
pub async fn list_libraries(state: &AppState) -> Result<Vec<LibrarySummary>, CommandError> {
    let repo = state.repo()?;
    repo.list_libraries().map_err(Into::into)
}

/// Create an empty, active library.
pub async fn add_library(name: String, state: &AppState) -> Result<i64, CommandError> {
    let repo = state.repo()?;
    repo.add_library(name.trim()).map_err(Into::into)
}

/// Show or hide a library's words.
pub async fn set_library_active(
    library_id: i64,
    active: bool,
    state: &AppState,
) -> Result<(), CommandError> {
    let repo = state.repo()?;
    repo.set_library_active(library_id, active)
        .map_err(Into::into)
}

/// Delete a library and all of its words. Returns the number of words removed.
pub async fn delete_library(library_id: i64, state: &AppState) -> Result<usize, CommandError> {
    let repo = state.repo()?;
    repo.delete_library(library_id).map_err(Into::into)
}
