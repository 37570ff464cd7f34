use rollcall_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("unsupported file format {0:?}; expected a .csv, .xlsx or .xls file")]
    UnsupportedFormat(String),
    #[error("could not read the CSV file; tried encodings: {}", .tried.join(", "))]
    Undecodable { tried: Vec<&'static str> },
    #[error("workbook has no worksheets: {0}")]
    EmptyWorkbook(PathBuf),
    #[error("output directory does not exist: {0}")]
    MissingOutputDir(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, FormatError>;
