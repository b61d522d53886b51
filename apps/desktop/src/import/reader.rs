//! Tabular file readers.
//!
//! Every format is read into plain rows of cell text; classification happens
//! afterwards in `vocab_core::parser`.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xls, Xlsx};
use csv::ReaderBuilder;
use vocab_core::SourceFormat;

use super::error::{ImportError, Result};

/// Maximum file size accepted for import (100 MB).
pub const MAX_IMPORT_FILE_SIZE: u64 = 100 * 1024 * 1024;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One row of cell text with its 1-based line (CSV) or row (sheet) number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow {
    pub line: usize,
    pub cells: Vec<String>,
}

/// Rows in source order.
pub type Rows = Vec<SourceRow>;

/// Read all rows of a file in the given format.
pub fn read_rows(path: &Path, format: SourceFormat) -> Result<Rows> {
    check_file(path, MAX_IMPORT_FILE_SIZE)?;

    match format {
        SourceFormat::Csv => read_csv(path),
        SourceFormat::Xlsx => {
            let workbook: Xlsx<_> =
                open_workbook(path).map_err(|e| spreadsheet_error(path, e))?;
            read_first_sheet(workbook, path)
        }
        SourceFormat::Xls => {
            let workbook: Xls<_> = open_workbook(path).map_err(|e| spreadsheet_error(path, e))?;
            read_first_sheet(workbook, path)
        }
    }
}

/// Check the file exists and is within the size limit.
pub fn check_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(ImportError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

fn read_csv(path: &Path) -> Result<Rows> {
    let bytes = fs::read(path).map_err(|e| io_error(path, e))?;
    let text = decode_text(&bytes).ok_or_else(|| ImportError::Decode {
        path: path.to_path_buf(),
    })?;

    parse_csv(&text).map_err(|source| ImportError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode CSV bytes as UTF-8 (with or without BOM), falling back to GBK.
///
/// Returns `None` when the bytes are valid in neither encoding.
pub fn decode_text(bytes: &[u8]) -> Option<Cow<'_, str>> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(body) {
        return Some(Cow::Borrowed(text));
    }

    let (text, had_errors) = encoding_rs::GBK.decode_without_bom_handling(body);
    if had_errors {
        None
    } else {
        Some(text)
    }
}

/// Split CSV text into rows. There is no header row and rows may differ in length.
///
/// Blank lines produce no row, so each row records the line it started on.
pub fn parse_csv(text: &str) -> std::result::Result<Rows, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .and_then(|pos| usize::try_from(pos.line()).ok())
            .unwrap_or(idx + 1);
        rows.push(SourceRow {
            line,
            cells: record.iter().map(str::to_string).collect(),
        });
    }
    Ok(rows)
}

fn read_first_sheet<R>(mut workbook: R, path: &Path) -> Result<Rows>
where
    R: Reader<BufReader<File>>,
    R::Error: std::fmt::Display,
{
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| spreadsheet_error(path, e))?,
        None => return Ok(Vec::new()),
    };

    // The range begins at the first used cell, not at A1.
    let first_row = range.start().map(|(row, _)| row as usize).unwrap_or(0);
    Ok(range
        .rows()
        .enumerate()
        .map(|(idx, row)| SourceRow {
            line: first_row + idx + 1,
            cells: row.iter().map(cell_text).collect(),
        })
        .collect())
}

/// Text of a spreadsheet cell. Empty and error cells become empty strings.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => number_text(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => number_text(dt.as_f64()),
    }
}

/// Whole numbers are written without a fractional part.
fn number_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn io_error(path: &Path, e: std::io::Error) -> ImportError {
    if e.kind() == std::io::ErrorKind::NotFound {
        ImportError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        ImportError::Io {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

fn spreadsheet_error(path: &Path, e: impl std::fmt::Display) -> ImportError {
    ImportError::Spreadsheet {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_plain_utf8() {
        let text = decode_text("hello,你好".as_bytes()).unwrap();
        assert_eq!(text, "hello,你好");
    }

    #[test]
    fn decode_strips_utf8_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("cat,猫".as_bytes());
        assert_eq!(decode_text(&bytes).unwrap(), "cat,猫");
    }

    #[test]
    fn decode_falls_back_to_gbk() {
        let (gbk, _, _) = encoding_rs::GBK.encode("apple,苹果");
        assert!(std::str::from_utf8(&gbk).is_err());
        assert_eq!(decode_text(&gbk).unwrap(), "apple,苹果");
    }

    #[test]
    fn parse_csv_handles_quotes_and_ragged_rows() {
        let rows = parse_csv("hello,你好\nworld\n\"one, two\",\"一,二\",x\n").unwrap();
        let cells: Vec<Vec<String>> = rows.into_iter().map(|r| r.cells).collect();
        assert_eq!(
            cells,
            vec![
                vec!["hello".to_string(), "你好".to_string()],
                vec!["world".to_string()],
                vec!["one, two".to_string(), "一,二".to_string(), "x".to_string()],
            ]
        );
    }

    #[test]
    fn parse_csv_records_source_lines() {
        let rows = parse_csv("hello,你好\n\n\nworld\n").unwrap();
        let lines: Vec<usize> = rows.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 4]);
    }

    #[test]
    fn cell_text_coerces_values() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("猫".to_string())), "猫");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::Float(3.0)), "3");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_rows(Path::new("/definitely/not/here.csv"), SourceFormat::Csv).unwrap_err();
        assert!(matches!(err, ImportError::FileNotFound { .. }));
        assert!(err.is_io());
    }

    #[test]
    fn oversized_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.csv");
        fs::write(&path, "a,甲\n").unwrap();

        let err = check_file(&path, 2).unwrap_err();
        assert!(matches!(err, ImportError::FileTooLarge { max_size: 2, .. }));
    }
}
