use crate::domain::CanonicalField;
use crate::rules::aliases::{normalize_header, AliasSets};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedColumn {
    pub index: usize,
    pub header: String,
    pub field: CanonicalField,
}

/// Input columns recognized as canonical fields, in header order. Each field
/// appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    columns: Vec<ResolvedColumn>,
}

impl ColumnMapping {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedColumn> {
        self.columns.iter()
    }

    pub fn get(&self, field: CanonicalField) -> Option<&ResolvedColumn> {
        self.columns.iter().find(|column| column.field == field)
    }

    pub fn contains(&self, field: CanonicalField) -> bool {
        self.get(field).is_some()
    }

    /// Column indices of the found fields, in output order.
    pub fn projection(&self) -> Vec<usize> {
        CanonicalField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|column| column.index))
            .collect()
    }
}

/// Matches headers left to right against the alias sets. Fields are tried in
/// `CanonicalField::ALL` order and the first unassigned field whose set
/// contains the header wins.
pub fn resolve_columns<S: AsRef<str>>(headers: &[S], aliases: &AliasSets) -> ColumnMapping {
    let mut mapping = ColumnMapping::default();
    for (index, header) in headers.iter().enumerate() {
        let header = header.as_ref();
        let normalized = normalize_header(header);
        let field = CanonicalField::ALL
            .into_iter()
            .find(|field| aliases.contains(*field, &normalized) && !mapping.contains(*field));
        if let Some(field) = field {
            mapping.columns.push(ResolvedColumn {
                index,
                header: header.to_string(),
                field,
            });
        }
    }
    mapping
}
