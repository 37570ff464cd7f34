use crate::encoding::CANDIDATE_ENCODINGS;
use crate::error::{FormatError, Result};
use crate::loader::{read_input, LoadedTable, TableSource};
use crate::sniff::sniff_delimiter;
use csv::ReaderBuilder;
use rollcall_core::{Cell, Progress, ProgressEvent, Table};
use std::path::Path;
use tracing::debug;

/// Reads delimited text, trying each candidate encoding until one decodes and
/// parses.
pub fn read_delimited(path: &Path, progress: &mut dyn Progress) -> Result<LoadedTable> {
    let bytes = read_input(path)?;
    let mut tried = Vec::new();

    for encoding in CANDIDATE_ENCODINGS {
        let label = encoding.label();
        tried.push(label);
        progress.report(ProgressEvent::TryingEncoding { encoding: label });

        let text = match encoding.decode(&bytes) {
            Ok(text) => text,
            Err(reason) => {
                debug!(encoding = label, reason, "decode failed");
                progress.report(ProgressEvent::EncodingFailed {
                    encoding: label,
                    reason: reason.to_string(),
                });
                continue;
            }
        };

        let delimiter = sniff_delimiter(&text);
        match parse_delimited(&text, delimiter) {
            Ok(table) => {
                debug!(
                    encoding = label,
                    delimiter = %char::from(delimiter).escape_default(),
                    rows = table.row_count(),
                    "parsed delimited text"
                );
                progress.report(ProgressEvent::EncodingChosen {
                    encoding: label,
                    delimiter: char::from(delimiter),
                });
                return Ok(LoadedTable {
                    table,
                    source: TableSource::Delimited {
                        encoding: label,
                        delimiter: char::from(delimiter),
                    },
                });
            }
            Err(err) => {
                debug!(encoding = label, error = %err, "parse failed");
                progress.report(ProgressEvent::EncodingFailed {
                    encoding: label,
                    reason: err.to_string(),
                });
            }
        }
    }

    Err(FormatError::Undecodable { tried })
}

/// Parses decoded text. The first record is the header row; empty fields
/// become `Missing` and blank lines are skipped.
pub fn parse_delimited(text: &str, delimiter: u8) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader
        .records()
        .filter(|record| !matches!(record, Ok(record) if is_blank(record)));

    let Some(header) = records.next().transpose()? else {
        return Ok(Table::default());
    };
    let mut table = Table::new(header.iter().map(str::to_string).collect());

    for record in records {
        let record = record?;
        let row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Cell::Missing
                } else {
                    Cell::text(field)
                }
            })
            .collect();
        table.push_row(row)?;
    }

    Ok(table)
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(str::is_empty)
}
