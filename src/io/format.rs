//! Table file formats.
use std::path::Path;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    JsonLines,
}

impl TableFormat {
    /// Guess format from extension (case insensitive).
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("jsonl") | Some("ndjson") => Ok(Self::JsonLines),
            Some(other) => Err(Error::UnsupportedFormat(other.to_string())),
            None => Err(Error::UnsupportedFormat(format!("{:?}", path))),
        }
    }
}
