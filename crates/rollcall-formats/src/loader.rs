use crate::delimited::read_delimited;
use crate::error::{FormatError, Result};
use crate::format::InputFormat;
use crate::spreadsheet::read_spreadsheet;
use rollcall_core::{Progress, ProgressEvent, Table};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Where a loaded table came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TableSource {
    Delimited {
        encoding: &'static str,
        delimiter: char,
    },
    Spreadsheet {
        sheet: String,
    },
}

#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: Table,
    pub source: TableSource,
}

/// Loads `path` as a table. The format is decided from the extension before
/// anything is read.
pub fn load_table(path: &Path, progress: &mut dyn Progress) -> Result<LoadedTable> {
    let format = InputFormat::from_path(path)?;
    progress.report(ProgressEvent::Reading {
        path: path.to_path_buf(),
    });
    match format {
        InputFormat::Delimited => read_delimited(path, progress),
        InputFormat::Spreadsheet => read_spreadsheet(path, progress),
    }
}

pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|err| not_found_or_io(path, err))
}

pub(crate) fn ensure_exists(path: &Path) -> Result<()> {
    fs::metadata(path)
        .map(|_| ())
        .map_err(|err| not_found_or_io(path, err))
}

fn not_found_or_io(path: &Path, err: std::io::Error) -> FormatError {
    if err.kind() == ErrorKind::NotFound {
        FormatError::NotFound(path.to_path_buf())
    } else {
        FormatError::Io(err)
    }
}
