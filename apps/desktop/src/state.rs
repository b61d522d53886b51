//! Application state.

use crate::db::SqliteRepository;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared application state.
///
/// The repository is the single access point to the store; every command
/// takes the lock, so writes are serialized.
pub struct AppState {
    pub repository: Arc<Mutex<SqliteRepository>>,
    pub default_batch_size: usize,
}

impl AppState {
    pub fn new(repository: SqliteRepository, default_batch_size: usize) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
            default_batch_size,
        }
    }

    /// Lock the repository. Fails only if a previous holder panicked.
    pub fn repo(&self) -> Result<MutexGuard<'_, SqliteRepository>, StateError> {
        self.repository.lock().map_err(|_| StateError::Poisoned)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("repository lock poisoned")]
    Poisoned,
}
