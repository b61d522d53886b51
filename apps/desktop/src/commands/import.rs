//! Import command.

use std::path::PathBuf;

use crate::import::{self, ImportReport};
use crate::state::AppState;

use super::{CommandError, ErrorKind};

/// Import a CSV or spreadsheet file into a new library.
///
/// The file is read on a blocking worker; the repository is locked only for
/// the atomic write.
pub async fn import_file(file_path: String, state: &AppState) -> Result<ImportReport, CommandError> {
    let path = PathBuf::from(file_path);
    let plan = tokio::task::spawn_blocking(move || import::prepare(&path))
        .await
        .map_err(|e| CommandError::new(ErrorKind::Import, format!("import failed: {}", e)))??;

    let repo = state.repo()?;
    import::commit(&repo, plan).map_err(Into::into)
}
