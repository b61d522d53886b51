//! Bulk import of word lists from CSV and spreadsheet files.
//!
//! An import runs in two phases. [`prepare`] reads and classifies the whole
//! file without touching the store, so unreadable or malformed files never
//! change anything. [`commit`] then creates a new library and inserts every
//! matched pair inside one atomic batch.

pub mod error;
pub mod reader;

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};
use vocab_core::parser::{self, library_name, ParsedRow, RowOutcome, SkipReason, SourceFormat};

use crate::db::SqliteRepository;

pub use error::{ImportError, Result};

/// A file that has been read and classified, ready to be written.
#[derive(Debug, Clone)]
pub struct ImportPlan {
    pub library_name: String,
    pub format: SourceFormat,
    pub rows: Vec<ParsedRow>,
}

impl ImportPlan {
    /// Number of rows that produced a word pair.
    pub fn matched(&self) -> usize {
        self.rows
            .iter()
            .filter(|r| matches!(r.outcome, RowOutcome::Matched { .. }))
            .count()
    }
}

/// A row that did not produce a word pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub row: usize,
    pub reason: SkipReason,
}

/// Summary of a finished import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub library_id: i64,
    pub library_name: String,
    pub format: SourceFormat,
    /// Words added to the store.
    pub inserted: usize,
    /// Matched rows whose English text was already in the library.
    pub duplicates: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Read and classify a file.
pub fn prepare(path: &Path) -> Result<ImportPlan> {
    let format = SourceFormat::from_path(path).ok_or_else(|| ImportError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let rows = reader::read_rows(path, format)?;
    let plan = ImportPlan {
        library_name: library_name(path),
        format,
        rows: parser::parse(rows.iter().map(|r| (r.line, r.cells.as_slice()))),
    };

    debug!(
        path = %path.display(),
        format = format.as_str(),
        rows = plan.rows.len(),
        matched = plan.matched(),
        "import file classified"
    );
    Ok(plan)
}

/// Write a prepared import into a new library.
///
/// Library creation and all inserts share one transaction; if any write
/// fails, nothing from this import remains in the store.
pub fn commit(repo: &SqliteRepository, plan: ImportPlan) -> Result<ImportReport> {
    let report = repo.atomic(|batch| -> Result<ImportReport> {
        let library_id = batch.add_library(&plan.library_name)?;

        let mut report = ImportReport {
            library_id,
            library_name: plan.library_name.clone(),
            format: plan.format,
            inserted: 0,
            duplicates: 0,
            skipped: Vec::new(),
        };

        for parsed in &plan.rows {
            match &parsed.outcome {
                RowOutcome::Matched { english, chinese } => {
                    if batch.add_word(english, chinese, library_id)? {
                        report.inserted += 1;
                    } else {
                        report.duplicates += 1;
                    }
                }
                RowOutcome::Skipped(reason) => {
                    debug!(row = parsed.row, ?reason, "row skipped");
                    report.skipped.push(SkippedRow {
                        row: parsed.row,
                        reason: *reason,
                    });
                }
            }
        }

        Ok(report)
    })?;

    info!(
        library = %report.library_name,
        library_id = report.library_id,
        inserted = report.inserted,
        duplicates = report.duplicates,
        skipped = report.skipped.len(),
        "import finished"
    );
    Ok(report)
}

/// Import a file into a new library.
pub fn import_file(repo: &SqliteRepository, path: &Path) -> Result<ImportReport> {
    info!(path = %path.display(), "importing word list");
    let plan = prepare(path)?;
    commit(repo, plan)
}
