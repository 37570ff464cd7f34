pub mod domain;
pub mod error;
pub mod progress;
pub mod rules;
pub mod table;

pub use domain::*;
pub use error::CoreError;
pub use progress::{Progress, ProgressEvent, Silent};
pub use rules::*;
pub use table::{Cell, Column, Table};
