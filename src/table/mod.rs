/*! Tabular data model

A [Table] is an ordered list of [Record]s plus the ordered list of columns they may use.
Records do not need to have every column: missing fields are treated as null.

Row order is meaningful (deduplication keeps the first occurrence).
!*/
mod record;
pub mod schema;

pub use record::{Record, Value};
pub use schema::ResolvedSchema;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Table {
    /// Empty table with a predefined header.
    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            records: Vec::new(),
        }
    }

    /// Build a table from records, columns being collected in first-seen order.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut table = Self::default();
        for record in records {
            table.push(record);
        }
        table
    }

    /// Append a record, extending the header with any field it introduces.
    pub fn push(&mut self, record: Record) {
        for name in record.field_names() {
            if !self.has_column(name) {
                self.columns.push(name.to_string());
            }
        }
        self.records.push(record);
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep only the records for which `keep` returns `true`, preserving order and header.
    pub fn retain(&mut self, keep: impl FnMut(&Record) -> bool) {
        self.records.retain(keep);
    }
}
