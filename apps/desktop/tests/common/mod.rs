//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;
use vocab_desktop::db::{LibraryRepository, SqliteRepository, WordRepository};
use vocab_desktop::state::AppState;

/// Fresh in-memory store.
pub fn repo() -> SqliteRepository {
    SqliteRepository::open_in_memory().expect("open in-memory store")
}

/// Fresh in-memory store wrapped in application state.
pub fn app_state() -> AppState {
    AppState::new(repo(), 20)
}

/// Create a library holding the given (english, chinese) pairs.
pub fn library_with(repo: &SqliteRepository, name: &str, pairs: &[(&str, &str)]) -> i64 {
    let id = repo.add_library(name).expect("add library");
    for (en, cn) in pairs {
        assert!(repo.add_word(en, cn, id).expect("add word"));
    }
    id
}

/// `n` generated pairs: ("word1", "词1"), ("word2", "词2"), ...
pub fn numbered_pairs(n: usize) -> Vec<(String, String)> {
    (1..=n)
        .map(|i| (format!("word{}", i), format!("词{}", i)))
        .collect()
}

/// Temporary directory holding one file with the given bytes.
pub struct Fixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

pub fn write_file(name: &str, contents: &[u8]) -> Fixture {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    Fixture { dir, path }
}
