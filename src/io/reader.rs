/*! Table loading.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::table::{Record, Table, Value};

use super::TableFormat;

const BOM: char = '\u{feff}';

/// Load a whole table, format being picked from the extension.
pub fn load_table(path: &Path) -> Result<Table, Error> {
    let format = TableFormat::from_path(path)?;
    let file = File::open(path)?;
    let table = match format {
        TableFormat::Csv => read_csv(file)?,
        TableFormat::JsonLines => read_jsonl(BufReader::new(file))?,
    };
    debug!("loaded {:?}: {} rows, columns {:?}", path, table.len(), table.columns());
    Ok(table)
}

/// Read CSV with a header row.
///
/// Empty cells become [Value::Null], every other cell is kept verbatim as [Value::Text].
pub fn read_csv<R: Read>(rdr: R) -> Result<Table, Error> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(rdr);

    let mut columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches(BOM).to_string())
        .collect();
    // BOM-only file
    if columns.iter().all(String::is_empty) {
        columns.clear();
    }

    let mut table = Table::with_columns(columns.clone());
    for row in reader.records() {
        let row = row?;
        let record: Record = columns
            .iter()
            .zip(row.iter())
            .map(|(column, cell)| {
                let value = if cell.is_empty() {
                    Value::Null
                } else {
                    Value::Text(cell.to_string())
                };
                (column.as_str(), value)
            })
            .collect();
        table.push(record);
    }

    Ok(table)
}

/// Read JSON Lines. Blank lines are skipped, any other invalid line fails the whole table.
pub fn read_jsonl<R: BufRead>(rdr: R) -> Result<Table, Error> {
    let mut table = Table::default();
    for line in rdr.lines() {
        let line = line?;
        let line = line.trim_start_matches(BOM);
        if line.trim().is_empty() {
            continue;
        }
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(line)?;
        table.push(object.into_iter().map(|(k, v)| (k, Value::from(v))).collect());
    }
    Ok(table)
}
