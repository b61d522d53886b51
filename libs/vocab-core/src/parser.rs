//! Bilingual row classification for tabular word lists.
//!
//! Each row is a sequence of cells. Cells are classified by content, not by
//! column position: a cell holding at least one CJK unified ideograph
//! (U+4E00..=U+9FA5) is Chinese, anything else is English.
//!
//! ```text
//! hello , 你好          -> Matched(hello, 你好)
//! 猫    , Cat           -> Matched(Cat, 猫)
//! world                 -> Skipped(TooFewCells)
//! bye   , 再见 , extra  -> Matched(bye, 再见)
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Supported import file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Csv,
    Xlsx,
    Xls,
}

impl SourceFormat {
    /// Detect the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "xls" => Some(Self::Xls),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Xls => "xls",
        }
    }
}

/// Library name for an imported file: its base name without extension.
pub fn library_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "import".to_string())
}

/// Whether the text contains a CJK unified ideograph.
pub fn is_chinese(text: &str) -> bool {
    text.chars().any(|c| ('\u{4E00}'..='\u{9FA5}').contains(&c))
}

/// Why a row did not produce a word pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Fewer than two non-empty cells.
    TooFewCells,
    /// No cell contains Chinese text.
    MissingChinese,
    /// Every cell contains Chinese text.
    MissingEnglish,
}

/// Classification result for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOutcome {
    Matched { english: String, chinese: String },
    Skipped(SkipReason),
}

/// Row outcome with its 1-based row number in the source file or sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedRow {
    pub row: usize,
    pub outcome: RowOutcome,
}

/// Classify a single row.
///
/// Cells are trimmed and empty ones dropped. When several cells fall into the
/// same class the first one wins; later cells are treated as notes.
pub fn classify_row<S: AsRef<str>>(cells: &[S]) -> RowOutcome {
    let values: Vec<&str> = cells
        .iter()
        .map(|c| c.as_ref().trim())
        .filter(|c| !c.is_empty())
        .collect();

    if values.len() < 2 {
        return RowOutcome::Skipped(SkipReason::TooFewCells);
    }

    let mut english = None;
    let mut chinese = None;
    for value in values {
        let slot = if is_chinese(value) {
            &mut chinese
        } else {
            &mut english
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    match (english, chinese) {
        (Some(en), Some(cn)) => RowOutcome::Matched {
            english: en.to_string(),
            chinese: cn.to_string(),
        },
        (Some(_), None) => RowOutcome::Skipped(SkipReason::MissingChinese),
        _ => RowOutcome::Skipped(SkipReason::MissingEnglish),
    }
}

/// Classify every row of a table.
///
/// Each row comes with its 1-based row number in the source, which is kept in
/// the result so skip reports point at the right place even when the reader
/// dropped blank lines.
pub fn parse<'a, I, S>(rows: I) -> Vec<ParsedRow>
where
    I: IntoIterator<Item = (usize, &'a [S])>,
    S: AsRef<str> + 'a,
{
    rows.into_iter()
        .map(|(row, cells)| ParsedRow {
            row,
            outcome: classify_row(cells),
        })
        .collect()
}
