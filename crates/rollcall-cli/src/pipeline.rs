use anyhow::Result;
use rollcall_config::AppConfig;
use rollcall_core::{
    clean_column, resolve_columns, AliasSets, CanonicalField, PhoneRules, Progress, ProgressEvent,
};
use rollcall_formats::{load_table, write_csv, LoadedTable, TableSource};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub aliases: AliasSets,
    pub phone: PhoneRules,
}

impl From<AppConfig> for PipelineOptions {
    fn from(config: AppConfig) -> Self {
        Self {
            aliases: config.aliases,
            phone: config.phone,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub field: CanonicalField,
    pub header: String,
    pub changed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanReport {
    pub input: String,
    pub output: String,
    pub source: TableSource,
    pub rows: usize,
    pub columns: Vec<ColumnReport>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Written(CleanReport),
    NoRecognizableColumns { input: String },
}

/// Loads `input`, renames and cleans the recognized columns, and writes them
/// to `output` in canonical order. Nothing is written when no column is
/// recognized.
pub fn process_file(
    input: &Path,
    output: &Path,
    options: &PipelineOptions,
    progress: &mut dyn Progress,
) -> Result<Outcome> {
    let LoadedTable { mut table, source } = load_table(input, progress)?;
    debug!(
        rows = table.row_count(),
        columns = table.width(),
        "input loaded"
    );

    let mapping = resolve_columns(table.headers().as_slice(), &options.aliases);
    if mapping.is_empty() {
        info!(input = %input.display(), "no recognizable columns");
        return Ok(Outcome::NoRecognizableColumns {
            input: input.display().to_string(),
        });
    }

    for resolved in mapping.iter() {
        debug!(header = %resolved.header, field = %resolved.field, "column matched");
        table.rename_column(resolved.index, resolved.field.as_str());
    }

    progress.report(ProgressEvent::Cleaning);
    let mut columns = Vec::with_capacity(mapping.len());
    for field in CanonicalField::ALL {
        let Some(resolved) = mapping.get(field) else {
            continue;
        };
        let changed = match table.column_mut(resolved.index) {
            Some(column) => clean_column(field, &mut column.cells, &options.phone),
            None => 0,
        };
        columns.push(ColumnReport {
            field,
            header: resolved.header.clone(),
            changed,
        });
    }

    let rows = table.row_count();
    let cleaned = table.project(&mapping.projection());

    progress.report(ProgressEvent::Saving {
        path: output.to_path_buf(),
    });
    write_csv(&cleaned, output)?;
    progress.report(ProgressEvent::Done);

    Ok(Outcome::Written(CleanReport {
        input: input.display().to_string(),
        output: output.display().to_string(),
        source,
        rows,
        columns,
    }))
}
