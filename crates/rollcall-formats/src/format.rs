use crate::error::{FormatError, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Delimited,
    Spreadsheet,
}

impl InputFormat {
    /// Picks the reader from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(InputFormat::Delimited),
            "xlsx" | "xls" => Ok(InputFormat::Spreadsheet),
            "" => Err(FormatError::UnsupportedFormat(String::new())),
            other => Err(FormatError::UnsupportedFormat(format!(".{other}"))),
        }
    }
}
