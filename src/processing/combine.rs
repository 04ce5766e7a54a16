//! Concatenating tables and normalizing headers.

use crate::error::{TableError, TableResult};
use crate::types::{Row, Table};

/// Name of the provenance column appended by [`concat_with_source`].
pub const SOURCE_COLUMN: &str = "SourceFile";

/// Concatenate same-shaped tables, tagging every data row with its source label.
///
/// The result header is the first table's header plus [`SOURCE_COLUMN`]. Later headers are
/// dropped without comparison; mismatched shapes come through as ragged rows. An empty input
/// yields an empty table.
pub fn concat_with_source<L>(tables: impl IntoIterator<Item = (L, Table)>) -> Table
where
    L: Into<String>,
{
    let mut header: Option<Row> = None;
    let mut rows = Vec::new();

    for (label, table) in tables {
        let label = label.into();
        if header.is_none() {
            let mut h = table.header;
            h.push(SOURCE_COLUMN.to_owned());
            header = Some(h);
        }
        rows.extend(table.rows.into_iter().map(|mut row| {
            row.push(label.clone());
            row
        }));
    }

    match header {
        Some(h) => Table::new(h, rows),
        None => Table::default(),
    }
}

/// Concatenate same-shaped tables under the first table's header, without provenance.
///
/// Later headers are dropped without comparison.
pub fn concat_tables(tables: impl IntoIterator<Item = Table>) -> Table {
    let mut iter = tables.into_iter();
    let Some(first) = iter.next() else {
        return Table::default();
    };
    let Table { header, mut rows } = first;
    for t in iter {
        rows.extend(t.rows);
    }
    Table::new(header, rows)
}

/// Collapse `header_rows` leading rows down to the single row `title_row` (1-based).
///
/// The raw row sequence is the header followed by the data rows. All of the first
/// `header_rows` rows are dropped and row `title_row` is reinserted as the only header.
pub fn single_header(table: Table, header_rows: usize, title_row: usize) -> TableResult<Table> {
    if title_row == 0 || title_row > header_rows {
        return Err(TableError::InvalidArgument {
            message: format!("title row {title_row} must be within 1..={header_rows}"),
        });
    }

    let raw = table.into_rows();
    if header_rows > raw.len() {
        return Err(TableError::InvalidArgument {
            message: format!(
                "table has {} rows but {header_rows} header rows were requested",
                raw.len()
            ),
        });
    }

    let mut iter = raw.into_iter();
    let header = iter
        .by_ref()
        .take(header_rows)
        .nth(title_row - 1)
        .unwrap_or_default();
    // `nth` stops early; skip the rest of the header block.
    let rows: Vec<Row> = iter.skip(header_rows - title_row).collect();
    Ok(Table::new(header, rows))
}

/// Prepend a generated header `Column1..ColumnN`, N being the widest row.
///
/// For headerless input: every row passed in becomes a data row.
pub fn add_generic_header(rows: Vec<Row>) -> Table {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let header = (1..=width).map(|i| format!("Column{i}")).collect();
    Table::new(header, rows)
}

#[cfg(test)]
mod tests {
    use super::{
        add_generic_header, concat_tables, concat_with_source, single_header, SOURCE_COLUMN,
    };
    use crate::types::Table;

    #[test]
    fn concat_appends_source_label_to_every_row() {
        let a = Table::from_str_rows(&[&["id", "v"], &["1", "x"], &["2", "y"]]);
        let b = Table::from_str_rows(&[&["id", "v"], &["3", "z"]]);
        let out = concat_with_source(vec![("a.csv", a), ("b.csv", b)]);

        assert_eq!(out.header, vec!["id", "v", SOURCE_COLUMN]);
        assert_eq!(
            out.rows,
            vec![
                vec!["1", "x", "a.csv"],
                vec!["2", "y", "a.csv"],
                vec!["3", "z", "b.csv"],
            ]
        );
    }

    #[test]
    fn concat_keeps_ragged_rows_as_is() {
        let a = Table::from_str_rows(&[&["id", "v"], &["1", "x"]]);
        let b = Table::from_str_rows(&[&["id"], &["2"]]);
        let out = concat_with_source(vec![("a", a), ("b", b)]);
        assert_eq!(out.rows[1], vec!["2", "b"]);
    }

    #[test]
    fn concat_of_nothing_is_empty() {
        let out = concat_with_source(Vec::<(String, Table)>::new());
        assert_eq!(out, Table::default());
    }

    #[test]
    fn concat_tables_keeps_first_header_only() {
        let a = Table::from_str_rows(&[&["id"], &["1"]]);
        let b = Table::from_str_rows(&[&["id"], &["2"], &["3"]]);
        let out = concat_tables(vec![a, b]);
        assert_eq!(out.header, vec!["id"]);
        assert_eq!(out.rows, vec![vec!["1"], vec!["2"], vec!["3"]]);
    }

    #[test]
    fn single_header_picks_title_row_and_drops_header_block() {
        let t = Table::from_str_rows(&[
            &["Report", "", ""],
            &["id", "name", "score"],
            &["(int)", "(text)", "(num)"],
            &["1", "a", "10"],
            &["2", "b", "20"],
        ]);
        let out = single_header(t, 3, 2).unwrap();
        assert_eq!(out.header, vec!["id", "name", "score"]);
        assert_eq!(out.rows, vec![vec!["1", "a", "10"], vec!["2", "b", "20"]]);
    }

    #[test]
    fn single_header_with_last_header_row_as_title() {
        let t = Table::from_str_rows(&[&["x"], &["y"], &["1"]]);
        let out = single_header(t, 2, 2).unwrap();
        assert_eq!(out.header, vec!["y"]);
        assert_eq!(out.rows, vec![vec!["1"]]);
    }

    #[test]
    fn single_header_rejects_title_outside_block() {
        let t = Table::from_str_rows(&[&["x"], &["y"], &["1"]]);
        assert!(single_header(t.clone(), 2, 3).is_err());
        assert!(single_header(t.clone(), 2, 0).is_err());
        assert!(single_header(t, 5, 1).is_err());
    }

    #[test]
    fn generic_header_covers_widest_row() {
        let out = add_generic_header(vec![
            vec!["a".to_string()],
            vec!["b".to_string(), "c".to_string(), "d".to_string()],
        ]);
        assert_eq!(out.header, vec!["Column1", "Column2", "Column3"]);
        assert_eq!(out.row_count(), 2);
    }
}
