/// Project user records onto the fixed CSV column set and write them out.
use std::fs::File;
use std::io;
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;

use super::errors::ExportError;
use crate::api::{Roster, UserRecord};

const COLUMN_COUNT: usize = 9;

/// Output columns, in order. Any other record field is dropped.
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "externalUserId",
    "id",
    "email",
    "isActive",
    "loginName",
    "firstName",
    "lastName",
    "role",
    "updatedAt",
];

/// Write `roster` as CSV to `out`: header row, then one row per record.
///
/// # Errors
///
/// Returns `csv::Error` on any write or flush failure.
pub fn write_roster<W: io::Write>(roster: &Roster, out: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(COLUMNS)?;
    for record in roster.records() {
        writer.write_record(project(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the whole roster to `path`, or leave `path` untouched.
///
/// Rows go to a temporary file beside `path`, which replaces `path` only once
/// every row has been flushed.
///
/// # Errors
///
/// Returns `ExportError` if the file cannot be created, written or moved into place.
pub fn write_csv_file(roster: &Roster, path: &Path) -> Result<(), ExportError> {
    write_atomically(path, |file| write_roster(roster, file))
}

fn write_atomically<F>(path: &Path, write: F) -> Result<(), ExportError>
where
    F: FnOnce(&mut File) -> Result<(), csv::Error>,
{
    let io_error = |source: io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    // Dropping `staged` on any early return deletes the temporary file.
    let mut staged = NamedTempFile::new_in(staging_dir(path)).map_err(io_error)?;
    write(staged.as_file_mut()).map_err(|source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    staged.persist(path).map_err(|err| io_error(err.error))?;
    Ok(())
}

/// Directory that holds `path`; `.` for a bare filename.
fn staging_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// One row's cells, aligned with [`COLUMNS`].
#[must_use]
pub fn project(record: &UserRecord) -> [String; COLUMN_COUNT] {
    COLUMNS.map(|column| cell(record.get(column)))
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        // Matches the historical report format consumed by downstream joins.
        Some(Value::Bool(true)) => "True".to_owned(),
        Some(Value::Bool(false)) => "False".to_owned(),
        Some(other) => other.to_string(),
    }
}
