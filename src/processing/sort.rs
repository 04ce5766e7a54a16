//! Stable ordering of data rows by one column.

use std::cmp::Ordering;

use crate::error::TableResult;
use crate::types::{ColumnRef, Table};

use super::header::cell;

/// How sort keys are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Plain string comparison (default).
    #[default]
    Lexicographic,
    /// Cells that parse as `f64` compare numerically (infinities included) and sort before
    /// non-numeric cells, which fall back to string comparison. `NaN` counts as non-numeric.
    Numeric,
}

/// Options for [`sort_by_column_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOptions {
    /// Key comparison mode.
    pub order: SortOrder,
}

/// Sort data rows ascending by `col` using string comparison.
///
/// The header stays in place and is never compared. Rows with equal keys keep their input
/// order.
pub fn sort_by_column(table: Table, col: impl Into<ColumnRef>) -> TableResult<Table> {
    sort_by_column_with(table, col, &SortOptions::default())
}

/// Sort data rows ascending by `col` with the given [`SortOptions`].
pub fn sort_by_column_with(
    table: Table,
    col: impl Into<ColumnRef>,
    options: &SortOptions,
) -> TableResult<Table> {
    let idx = col.into().resolve(&table.header)?;

    // Shape check up front so the comparator can index freely.
    for (i, row) in table.rows.iter().enumerate() {
        cell(row, i + 1, idx)?;
    }

    let Table { header, mut rows } = table;
    match options.order {
        SortOrder::Lexicographic => rows.sort_by(|a, b| a[idx].cmp(&b[idx])),
        SortOrder::Numeric => rows.sort_by(|a, b| numeric_cmp(&a[idx], &b[idx])),
    }
    Ok(Table::new(header, rows))
}

fn numeric_cmp(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

// NaN has no place among numbers; it sorts with the non-numeric text.
fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}
