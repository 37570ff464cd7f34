use crate::error::{FormatError, Result};
use crate::loader::{ensure_exists, LoadedTable, TableSource};
use calamine::{open_workbook_auto, Data, Reader};
use rollcall_core::{Cell, Progress, ProgressEvent, Table};
use std::path::Path;
use tracing::debug;

/// Reads the first worksheet of an `.xlsx`/`.xls` workbook.
pub fn read_spreadsheet(path: &Path, progress: &mut dyn Progress) -> Result<LoadedTable> {
    ensure_exists(path)?;
    let mut workbook = open_workbook_auto(path)?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| FormatError::EmptyWorkbook(path.to_path_buf()))?;
    progress.report(ProgressEvent::ReadingSheet {
        sheet: sheet.clone(),
    });
    let range = workbook.worksheet_range(&sheet)?;
    let table = rows_to_table(range.rows())?;
    debug!(
        sheet = %sheet,
        rows = table.row_count(),
        columns = table.width(),
        "parsed worksheet"
    );

    Ok(LoadedTable {
        table,
        source: TableSource::Spreadsheet { sheet },
    })
}

/// Builds a table from worksheet rows. The first row holds the headers; rows
/// with no values are skipped.
pub fn rows_to_table<'a, I>(rows: I) -> Result<Table>
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return Ok(Table::default());
    };
    let headers = header
        .iter()
        .map(|data| data_to_cell(data).to_string())
        .collect();
    let mut table = Table::new(headers);

    for row in rows {
        let cells: Vec<Cell> = row.iter().map(data_to_cell).collect();
        if cells.iter().all(Cell::is_missing) {
            continue;
        }
        table.push_row(cells)?;
    }
    Ok(table)
}

fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Missing,
        Data::String(value) if value.is_empty() => Cell::Missing,
        Data::String(value) => Cell::text(value.as_str()),
        Data::Float(value) => Cell::Number(*value),
        // exact, f64 would round large integers
        Data::Int(value) => Cell::Text(value.to_string()),
        other => Cell::Text(other.to_string()),
    }
}
