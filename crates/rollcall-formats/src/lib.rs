pub mod delimited;
pub mod encoding;
pub mod error;
pub mod format;
pub mod loader;
pub mod sniff;
pub mod spreadsheet;
pub mod writer;

pub use error::{FormatError, Result};
pub use format::InputFormat;
pub use loader::{load_table, LoadedTable, TableSource};
pub use writer::write_csv;
