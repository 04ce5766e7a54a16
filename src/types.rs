//! Core data model types.
//!
//! A [`Table`] is a header row plus ordered data rows. Every cell is opaque text: there is no
//! type system for cell values, and empty cells are empty strings.

use serde::{Deserialize, Serialize};

/// A single row of cells.
pub type Row = Vec<String>;

/// In-memory table: a header row followed by data rows.
///
/// Data rows are nominally as wide as the header, but this is not enforced. Operations that
/// index a row by a resolved position fail with [`crate::TableError::RowShape`] when the
/// position does not exist in that row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Column names. Lookup by name takes the first match.
    pub header: Row,
    /// Data rows, in order.
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a table from a header and data rows.
    pub fn new(header: Row, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// Split a raw row sequence into header (first row) and data rows.
    ///
    /// An empty sequence yields a table with an empty header and no rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut iter = rows.into_iter();
        let header = iter.next().unwrap_or_default();
        Self {
            header,
            rows: iter.collect(),
        }
    }

    /// Build a table from string literals. Mostly useful in tests and examples.
    pub fn from_str_rows(rows: &[&[&str]]) -> Self {
        Self::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|c| (*c).to_owned()).collect())
                .collect(),
        )
    }

    /// Flatten back into a raw row sequence with the header first.
    pub fn into_rows(self) -> Vec<Row> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        out.push(self.header);
        out.extend(self.rows);
        out
    }

    /// Number of data rows (the header is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, as defined by the header row.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Returns the position of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Iterate over the cells of one column, `None` where a row is too short.
    pub fn column(&self, idx: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows.iter().map(move |row| row.get(idx).map(String::as_str))
    }
}

/// A reference to a column, either by zero-based position or by header name.
///
/// Public operations accept `impl Into<ColumnRef>` and resolve it once against the header
/// (see [`crate::processing::header`]).
///
/// Deserializes from either a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnRef {
    /// Zero-based column position.
    Index(usize),
    /// Header-row column name.
    Name(String),
}

impl From<usize> for ColumnRef {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl From<&str> for ColumnRef {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for ColumnRef {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<&String> for ColumnRef {
    fn from(value: &String) -> Self {
        Self::Name(value.clone())
    }
}
