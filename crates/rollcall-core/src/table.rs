use crate::error::CoreError;
use std::fmt;

/// A single cell value. `Missing` is kept apart from the empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Text rendering of a present value, `None` for `Missing`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Missing => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(value) => f.write_str(value),
            Cell::Number(value) => f.write_str(&format_number(*value)),
            Cell::Missing => Ok(()),
        }
    }
}

// Spreadsheets store integers as floats; `9876543210.0` must render as `9876543210`.
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

/// Column-oriented table. Every column holds exactly `row_count` cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        let columns = headers
            .into_iter()
            .map(|name| Column {
                name,
                cells: Vec::new(),
            })
            .collect();
        Self {
            columns,
            row_count: 0,
        }
    }

    /// Appends a row. Short rows are padded with `Missing`; rows wider than the
    /// header are rejected.
    pub fn push_row(&mut self, mut row: Vec<Cell>) -> Result<(), CoreError> {
        let expected = self.columns.len();
        if row.len() > expected {
            return Err(CoreError::RowTooWide {
                row: self.row_count + 1,
                expected,
                found: row.len(),
            });
        }
        row.resize(expected, Cell::Missing);
        for (column, cell) in self.columns.iter_mut().zip(row) {
            column.cells.push(cell);
        }
        self.row_count += 1;
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.name.as_str())
            .collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn column_mut(&mut self, index: usize) -> Option<&mut Column> {
        self.columns.get_mut(index)
    }

    pub fn rename_column(&mut self, index: usize, name: &str) -> bool {
        match self.columns.get_mut(index) {
            Some(column) => {
                column.name = name.to_string();
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<&Cell>> + '_ {
        (0..self.row_count).map(move |row| {
            self.columns
                .iter()
                .filter_map(|column| column.cells.get(row))
                .collect()
        })
    }

    /// Keeps only the columns at `indices`, in that order. Out-of-range or
    /// repeated indices are skipped.
    pub fn project(self, indices: &[usize]) -> Table {
        let row_count = self.row_count;
        let mut slots: Vec<Option<Column>> = self.columns.into_iter().map(Some).collect();
        let columns = indices
            .iter()
            .filter_map(|&index| slots.get_mut(index).and_then(Option::take))
            .collect();
        Table { columns, row_count }
    }
}
