//! Column-reduced copies of a table.

use std::collections::BTreeSet;

use crate::error::TableResult;
use crate::types::{ColumnRef, Row, Table};

use super::header::{cell, resolve_columns};

/// Whether the columns passed to [`project`] are removed or kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Delete exactly the listed columns.
    Remove,
    /// Keep the listed columns, delete every other column of the header.
    Keep,
}

/// Return a copy of `table` with columns removed; the input is left untouched.
///
/// With [`Projection::Keep`] the deleted set is every header position not listed. Columns keep
/// their original relative order; use [`select_columns`] to reorder. Each listed position is
/// removed once, even if listed twice.
///
/// Fails with [`crate::TableError::RowShape`] if a position to delete does not exist in a row.
pub fn project<C>(table: &Table, cols: &[C], mode: Projection) -> TableResult<Table>
where
    C: Clone + Into<ColumnRef>,
{
    let listed: BTreeSet<usize> = resolve_columns(&table.header, cols)?.into_iter().collect();

    let to_delete: Vec<usize> = match mode {
        Projection::Remove => listed.into_iter().rev().collect(),
        Projection::Keep => (0..table.header.len())
            .rev()
            .filter(|i| !listed.contains(i))
            .collect(),
    };

    let header = delete_positions(&table.header, 0, &to_delete)?;
    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| delete_positions(row, i + 1, &to_delete))
        .collect::<TableResult<Vec<_>>>()?;
    Ok(Table::new(header, rows))
}

/// Copy `row`, deleting `descending` positions (highest first so earlier indices stay valid).
fn delete_positions(row: &Row, row_no: usize, descending: &[usize]) -> TableResult<Row> {
    let mut out = row.clone();
    for &idx in descending {
        cell(&out, row_no, idx)?;
        out.remove(idx);
    }
    Ok(out)
}

/// Return a copy of `table` holding only `cols`, in the order given.
///
/// A column may be listed more than once.
pub fn select_columns<C>(table: &Table, cols: &[C]) -> TableResult<Table>
where
    C: Clone + Into<ColumnRef>,
{
    let idxs = resolve_columns(&table.header, cols)?;
    let pick = |row: &Row, row_no: usize| -> TableResult<Row> {
        idxs.iter()
            .map(|&idx| cell(row, row_no, idx).map(str::to_owned))
            .collect()
    };

    let header = pick(&table.header, 0)?;
    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| pick(row, i + 1))
        .collect::<TableResult<Vec<_>>>()?;
    Ok(Table::new(header, rows))
}

#[cfg(test)]
mod tests {
    use super::{project, select_columns, Projection};
    use crate::processing::header::index_columns;
    use crate::types::Table;

    fn wide() -> Table {
        Table::from_str_rows(&[
            &["id", "name", "lat", "lon", "note"],
            &["1", "Pier", "-33.8", "151.2", "x"],
            &["2", "Dock", "-33.9", "151.1", "y"],
        ])
    }

    #[test]
    fn remove_deletes_listed_columns_from_every_row() {
        let t = wide();
        let out = project(&t, &["note", "name"], Projection::Remove).unwrap();
        assert_eq!(out.header, vec!["id", "lat", "lon"]);
        assert_eq!(out.rows[1], vec!["2", "-33.9", "151.1"]);
        // Source untouched.
        assert_eq!(t, wide());
    }

    #[test]
    fn keep_retains_only_listed_columns() {
        let t = wide();
        let out = project(&t, &["lat", "id"], Projection::Keep).unwrap();
        assert_eq!(out.header, vec!["id", "lat"]);
        assert_eq!(out.rows[0], vec!["1", "-33.8"]);

        let idx = index_columns(&out.header, &["id", "lat"]).unwrap();
        assert_eq!(idx, vec![0, 1]);
    }

    #[test]
    fn removing_a_set_and_its_complement_leaves_no_columns() {
        let t = wide();
        let first = project(&t, &[0usize, 2], Projection::Remove).unwrap();
        let rest: Vec<usize> = (0..first.column_count()).collect();
        let empty = project(&first, &rest, Projection::Remove).unwrap();
        assert!(empty.header.is_empty());
        assert!(empty.rows.iter().all(|r| r.is_empty()));
        assert_eq!(empty.row_count(), 2);
    }

    #[test]
    fn duplicate_positions_are_removed_once() {
        let out = project(&wide(), &[1usize, 1], Projection::Remove).unwrap();
        assert_eq!(out.header, vec!["id", "lat", "lon", "note"]);
    }

    #[test]
    fn project_reports_short_rows() {
        let t = Table::from_str_rows(&[&["a", "b", "c"], &["1"]]);
        assert!(project(&t, &["c"], Projection::Remove).is_err());
    }

    #[test]
    fn select_columns_reorders() {
        let out = select_columns(&wide(), &["lon", "lat", "id"]).unwrap();
        assert_eq!(out.header, vec!["lon", "lat", "id"]);
        assert_eq!(out.rows[0], vec!["151.2", "-33.8", "1"]);
    }
}
