/*!
# IO utilities

Loading and saving of [crate::table::Table]s.

Two on-disk formats are supported, picked from the file extension:
- `.csv`: header row, UTF-8. A byte-order mark is written (spreadsheet tools need it) and skipped on read.
- `.jsonl`/`.ndjson`: one JSON object per line, as produced by the scrapers.

Every file handle is scoped to the function that opens it, so an error while reading one table
never leaves a handle open or affects other tables.
!*/
mod format;
pub mod reader;
pub mod writer;

pub use format::TableFormat;
pub use reader::load_table;
pub use writer::{append_table, save_table};

use std::path::PathBuf;

use log::warn;

use crate::error::Error;

/// Expand a list of paths and glob patterns into existing paths.
///
/// Entries that contain no glob metacharacter are kept as is (even if they do not exist,
/// so that the failure is reported where the file is read).
/// Patterns matching nothing are logged.
pub fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    for input in inputs {
        let pattern = input.to_string_lossy();
        if !pattern.contains(['*', '?', '[']) {
            paths.push(input.clone());
            continue;
        }

        let before = paths.len();
        for entry in glob::glob(&pattern)? {
            paths.push(entry?);
        }
        if paths.len() == before {
            warn!("pattern {} matched no file", pattern);
        }
    }
    Ok(paths)
}
