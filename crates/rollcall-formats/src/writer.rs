use crate::error::{FormatError, Result};
use rollcall_core::Table;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `table` as comma-separated UTF-8 with a byte-order mark. The file is
/// staged next to `path` and renamed into place, so a failed write leaves no
/// partial output. An existing file keeps its permissions; a new one gets the
/// same mode as any other file created under the process umask.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    if !dir.is_dir() {
        return Err(FormatError::MissingOutputDir(dir.to_path_buf()));
    }

    let mut staged = staging_file(dir, path)?;
    staged.write_all(UTF8_BOM)?;
    {
        let mut writer = csv::Writer::from_writer(&mut staged);
        writer.write_record(table.headers())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }
        writer.flush()?;
    }
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|err| FormatError::Io(err.error))?;

    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.width(),
        "wrote csv"
    );
    Ok(())
}

fn staging_file(dir: &Path, target: &Path) -> Result<NamedTempFile> {
    let mut builder = Builder::new();
    // tempfile defaults to 0600; 0666 is narrowed by the umask at creation
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let staged = builder.tempfile_in(dir)?;
    if let Ok(existing) = fs::metadata(target) {
        fs::set_permissions(staged.path(), existing.permissions())?;
    }
    Ok(staged)
}
