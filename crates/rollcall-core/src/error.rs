use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("alias cannot be empty")]
    InvalidAlias,
    #[error("invalid country code: {0}")]
    InvalidCountryCode(String),
    #[error("invalid national number length: {0}")]
    InvalidNationalDigits(usize),
    #[error("row {row} has {found} fields, expected {expected}")]
    RowTooWide {
        row: usize,
        expected: usize,
        found: usize,
    },
}
