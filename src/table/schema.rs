//! Column synonyms.
//!
//! Tables produced by different scrapers (and by different versions of them)
//! do not agree on column names. Each logical field has an ordered list of
//! accepted names, and the first one present in a table wins.
use super::Table;

/// Columns that may hold the document text, most processed first.
pub const TEXT_COLUMNS: &[&str] = &["processed_text", "text"];

/// Columns that may hold the provenance URL.
pub const URL_COLUMNS: &[&str] = &["source_url", "Video Links", "video_url", "url"];

/// Columns that may hint at the source type.
pub const TYPE_COLUMNS: &[&str] = &["source_type", "channel_category", "category"];

/// Returns the first synonym that is a column of `table`.
pub fn resolve_column<'a>(table: &Table, synonyms: &[&'a str]) -> Option<&'a str> {
    synonyms
        .iter()
        .copied()
        .find(|name| table.has_column(name))
}

/// Logical fields resolved to actual column names for one table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedSchema {
    pub text: Option<&'static str>,
    pub url: Option<&'static str>,
    pub kind: Option<&'static str>,
}

impl ResolvedSchema {
    pub fn resolve(table: &Table) -> Self {
        Self {
            text: resolve_column(table, TEXT_COLUMNS),
            url: resolve_column(table, URL_COLUMNS),
            kind: resolve_column(table, TYPE_COLUMNS),
        }
    }
}
