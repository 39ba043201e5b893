/*! Table saving.

CSV files are written with a UTF-8 byte-order mark.
Appending to an existing CSV file aligns rows on the header already present in the file
rather than rewriting it.
!*/
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::Error;
use crate::table::{Record, Table};

use super::TableFormat;

const BOM: &[u8] = b"\xef\xbb\xbf";

/// Write `table` to `path`, replacing any existing file.
pub fn save_table(table: &Table, path: &Path) -> Result<(), Error> {
    let format = TableFormat::from_path(path)?;
    let mut file = BufWriter::new(File::create(path)?);
    match format {
        TableFormat::Csv => {
            file.write_all(BOM)?;
            // a header-less file, so that appending to it later starts afresh
            if !table.columns().is_empty() {
                write_csv(table, table.columns(), true, &mut file)?;
            }
        }
        TableFormat::JsonLines => write_jsonl(table, &mut file)?,
    }
    file.flush()?;
    debug!("saved {} rows to {:?}", table.len(), path);
    Ok(())
}

/// Add the rows of `table` at the end of `path`.
///
/// If `path` does not exist (or is empty, or is a CSV file without header), this is [save_table].
/// For CSV, rows are laid out following the existing header; columns of `table` that are not in
/// that header are dropped (and logged).
pub fn append_table(table: &Table, path: &Path) -> Result<(), Error> {
    let exists = path.metadata().map(|m| m.len() > 0).unwrap_or(false);
    if !exists {
        return save_table(table, path);
    }

    let format = TableFormat::from_path(path)?;
    match format {
        TableFormat::Csv => {
            let header = read_header(path)?;
            if header.iter().all(String::is_empty) {
                return save_table(table, path);
            }
            for column in table.columns() {
                if !header.contains(column) {
                    warn!(
                        "{:?}: column '{}' is not in the existing header, dropping it",
                        path, column
                    );
                }
            }
            let mut file = BufWriter::new(OpenOptions::new().append(true).open(path)?);
            write_csv(table, &header, false, &mut file)?;
            file.flush()?;
        }
        TableFormat::JsonLines => {
            let mut file = BufWriter::new(OpenOptions::new().append(true).open(path)?);
            write_jsonl(table, &mut file)?;
            file.flush()?;
        }
    }
    debug!("appended {} rows to {:?}", table.len(), path);
    Ok(())
}

/// Header of an existing CSV file.
fn read_header(path: &Path) -> Result<Vec<String>, Error> {
    let mut reader = csv::Reader::from_path(path)?;
    Ok(reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect())
}

fn write_csv<W: Write>(
    table: &Table,
    columns: &[String],
    with_header: bool,
    wtr: W,
) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(wtr);
    if with_header {
        wtr.write_record(columns)?;
    }
    for record in table.iter() {
        wtr.write_record(row(record, columns))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Cells of `record` in `columns` order.
fn row(record: &Record, columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .map(|c| record.get(c).map(|v| v.to_string()).unwrap_or_default())
        .collect()
}

fn write_jsonl<W: Write>(table: &Table, wtr: &mut W) -> Result<(), Error> {
    for record in table.iter() {
        serde_json::to_writer(&mut *wtr, record)?;
        wtr.write_all(b"\n")?;
    }
    Ok(())
}
