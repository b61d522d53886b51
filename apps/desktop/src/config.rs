//! Runtime configuration from the environment.
//!
//! Every variable is optional:
//! - `VOCAB_DB_PATH`: database file (default: local data dir)
//! - `VOCAB_BATCH_SIZE`: default study batch size
//! - `RUST_LOG`: log filter (default: `info`)

use std::path::PathBuf;

use vocab_core::session::{batch_size, DEFAULT_BATCH_SIZE};

const APP_DIR: &str = "vocab-trainer";
const DB_FILE: &str = "vocab.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub batch_size: usize,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            batch_size: DEFAULT_BATCH_SIZE,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from process environment, reading a `.env` file first if present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            db_path: lookup("VOCAB_DB_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            batch_size: lookup("VOCAB_BATCH_SIZE")
                .map(|s| batch_size(&s))
                .unwrap_or(defaults.batch_size),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

/// Database location under the platform data directory, falling back to the
/// current directory.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DB_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert!(config.db_path.ends_with("vocab-trainer/vocab.db"));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("VOCAB_DB_PATH", "/tmp/words.db"),
            ("VOCAB_BATCH_SIZE", "35"),
            ("RUST_LOG", "debug"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/tmp/words.db"));
        assert_eq!(config.batch_size, 35);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn invalid_batch_size_uses_default() {
        let config = Config::from_lookup(lookup(&[("VOCAB_BATCH_SIZE", "lots")]));
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    }
}
