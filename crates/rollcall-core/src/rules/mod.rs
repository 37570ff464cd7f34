pub mod aliases;
pub mod resolve;

pub use aliases::{normalize_header, AliasSets, EMAIL_ALIASES, NAME_ALIASES, PHONE_ALIASES};
pub use resolve::{resolve_columns, ColumnMapping, ResolvedColumn};
