/*! Deduplication

Exact deduplication of a table on a key column: the first occurrence of a key wins,
later ones are dropped, and survivors keep their relative order.

Nothing fuzzy is done here: keys are compared as they were normalized upstream
(so case and whitespace matter). Null keys compare equal to each other.
!*/
use std::path::Path;

use log::{error, info};
use serde::Serialize;

use crate::error::Error;
use crate::filtering::{FilterMut, KeyFilter, KeyFilterKind};
use crate::io::{load_table, save_table};
use crate::table::Table;

/// Default key column.
pub const DEFAULT_KEY: &str = "processed_text";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DedupReport {
    pub original_count: usize,
    pub final_count: usize,
    pub removed_count: usize,
}

/// Deduplicate `table` on `key`, keeping every key in memory.
pub fn deduplicate(table: Table, key: &str) -> Result<(Table, DedupReport), Error> {
    deduplicate_with(table, key, &mut KeyFilter::default())
}

/// Deduplicate `table` on `key`, using the provided (possibly already fed) uniqueness filter.
///
/// Feeding the same filter to successive calls deduplicates across tables.
pub fn deduplicate_with(
    mut table: Table,
    key: &str,
    filter: &mut impl for<'a> FilterMut<&'a str>,
) -> Result<(Table, DedupReport), Error> {
    if !table.has_column(key) {
        return Err(Error::MissingColumn {
            column: key.to_string(),
            available: table.columns().to_vec(),
        });
    }

    let original_count = table.len();
    table.retain(|record| filter.detect_mut(&*record.text(key)));
    let final_count = table.len();

    let report = DedupReport {
        original_count,
        final_count,
        removed_count: original_count - final_count,
    };
    Ok((table, report))
}

/// Deduplicate the table at `src` and save the result at `dst`.
///
/// Errors (unreadable source, missing key, unwritable destination) are logged before being returned.
pub fn dedup_file(
    src: &Path,
    dst: &Path,
    key: &str,
    kind: KeyFilterKind,
) -> Result<DedupReport, Error> {
    let table = load_table(src).map_err(|e| {
        error!("failed to read input file {:?}: {}", src, e);
        e
    })?;
    info!("[{:?}] original dataset size: {}", src, table.len());

    let (table, report) =
        deduplicate_with(table, key, &mut KeyFilter::new(kind)).map_err(|e| {
            error!("[{:?}] {}", src, e);
            e
        })?;
    info!(
        "[{:?}] removed {} duplicates, final dataset size: {}",
        src, report.removed_count, report.final_count
    );

    save_table(&table, dst).map_err(|e| {
        error!("failed to save output file {:?}: {}", dst, e);
        e
    })?;
    info!("saved deduplicated data to {:?}", dst);

    Ok(report)
}
