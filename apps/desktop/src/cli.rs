//! Command-line arguments for the engine binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "vocab-desktop",
    version,
    about = "Vocabulary trainer engine: import word lists and print store statistics"
)]
pub struct Cli {
    /// CSV, XLSX or XLS files to import, one new library per file.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Database file (overrides VOCAB_DB_PATH).
    #[arg(long = "db", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Default study batch size (overrides VOCAB_BATCH_SIZE).
    #[arg(long = "batch-size", value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub batch_size: Option<u32>,
}

impl Cli {
    /// Apply command-line overrides on top of the environment configuration.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(db) = &self.db {
            config.db_path = db.clone();
        }
        if let Some(size) = self.batch_size {
            config.batch_size = size as usize;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn base() -> Config {
        Config {
            db_path: PathBuf::from("env.db"),
            batch_size: 20,
            log_filter: "info".to_string(),
        }
    }

    #[test]
    fn positional_files_are_collected() {
        let cli = Cli::try_parse_from(["vocab-desktop", "a.csv", "b.xlsx"]).unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("a.csv"), PathBuf::from("b.xlsx")]);
        assert_eq!(cli.apply(base()), base());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "vocab-desktop",
            "--db",
            "/tmp/other.db",
            "--batch-size",
            "35",
            "words.csv",
        ])
        .unwrap();

        let config = cli.apply(base());
        assert_eq!(config.db_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.batch_size, 35);
        assert_eq!(cli.files, vec![PathBuf::from("words.csv")]);
    }

    #[test]
    fn help_is_not_a_file() {
        let err = Cli::try_parse_from(["vocab-desktop", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        assert!(Cli::try_parse_from(["vocab-desktop", "--batch-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["vocab-desktop", "--batch-size", "abc"]).is_err());
    }
}
