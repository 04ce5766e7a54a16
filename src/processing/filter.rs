//! Row selection for [`crate::types::Table`].

use crate::error::TableResult;
use crate::types::{ColumnRef, Row, Table};

use super::header::{cell, resolve_columns};

/// Keep only data rows where every required column holds a non-empty string.
///
/// Rows are tracked by position, so a row is dropped only for its own missing values, never
/// because an identical row elsewhere is missing one. The header is always kept.
///
/// Fails with [`crate::TableError::RowShape`] if a required position does not exist in some row.
pub fn required_fields<C>(table: Table, cols: &[C]) -> TableResult<Table>
where
    C: Clone + Into<ColumnRef>,
{
    let idxs = resolve_columns(&table.header, cols)?;

    let mut keep = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        let mut complete = true;
        for &idx in &idxs {
            if cell(row, i + 1, idx)?.is_empty() {
                complete = false;
                break;
            }
        }
        keep.push(complete);
    }

    let Table { header, rows } = table;
    let rows = rows
        .into_iter()
        .zip(keep)
        .filter_map(|(row, k)| k.then_some(row))
        .collect();
    Ok(Table::new(header, rows))
}

/// Keep only data rows whose cell at `col` equals `target` as a string.
///
/// Comparison is on string form only: `"1"` and `"1.0"` are different values.
pub fn attribute_filter(
    table: Table,
    col: impl Into<ColumnRef>,
    target: impl ToString,
) -> TableResult<Table> {
    let idx = col.into().resolve(&table.header)?;
    let target = target.to_string();

    let Table { header, rows } = table;
    let mut out: Vec<Row> = Vec::new();
    for (i, row) in rows.into_iter().enumerate() {
        if cell(&row, i + 1, idx)? == target {
            out.push(row);
        }
    }
    Ok(Table::new(header, out))
}
