//! Shared plumbing for the two CSV-backed stores. Every call opens the file,
//! does its work and drops the handle before returning.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Create `path` with `header` followed by `rows`. Returns `false` without
/// touching anything if the file already exists.
pub(crate) fn create<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<bool> {
    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(Error::io(path, e)),
    };

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.write_record(header).map_err(|e| write_error(path, e))?;
    for row in rows {
        wtr.serialize(row).map_err(|e| write_error(path, e))?;
    }
    finish(path, wtr)?;
    Ok(true)
}

/// Append one row to an existing file.
pub(crate) fn append<T: Serialize>(path: &Path, row: &T) -> Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.serialize(row).map_err(|e| write_error(path, e))?;
    finish(path, wtr)
}

/// Read every row of `path`, checking the header and running `check` on each
/// parsed row. Any failure is reported with the file and line it came from.
pub(crate) fn read_all<T, F>(path: &Path, header: &[&str], check: F) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    F: Fn(&T) -> Result<()>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| Error::from_csv(path, e))?;

    let headers = rdr
        .headers()
        .map_err(|e| Error::from_csv(path, e))?
        .clone();
    if !headers.iter().eq(header.iter().copied()) {
        let found: Vec<&str> = headers.iter().collect();
        return Err(Error::corruption(
            path,
            Some(1),
            format!(
                "unexpected header [{}], expected [{}]",
                found.join(","),
                header.join(",")
            ),
        ));
    }

    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();
    while rdr
        .read_record(&mut record)
        .map_err(|e| Error::from_csv(path, e))?
    {
        let line = record.position().map(csv::Position::line);
        let row: T = record
            .deserialize(Some(&headers))
            .map_err(|e| Error::corruption(path, line, e.to_string()))?;
        check(&row).map_err(|e| Error::corruption(path, line, e.to_string()))?;
        rows.push(row);
    }

    Ok(rows)
}

fn finish(path: &Path, wtr: csv::Writer<File>) -> Result<()> {
    let file = wtr
        .into_inner()
        .map_err(|e| Error::io(path, e.into_error()))?;
    file.sync_all().map_err(|e| Error::io(path, e))
}

fn write_error(path: &Path, err: csv::Error) -> Error {
    match err.into_kind() {
        csv::ErrorKind::Io(e) => Error::io(path, e),
        other => Error::io(path, io::Error::other(format!("{other:?}"))),
    }
}

