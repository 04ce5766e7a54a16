//! Collapse a table to one row per distinct key value.

use std::collections::{BTreeSet, HashSet};

use crate::error::TableResult;
use crate::types::{ColumnRef, Table};

use super::header::cell;

/// Distinct non-empty values of `col`, sorted lexicographically.
pub fn unique_values(table: &Table, col: impl Into<ColumnRef>) -> TableResult<Vec<String>> {
    let idx = col.into().resolve(&table.header)?;

    let mut seen = BTreeSet::new();
    for (i, row) in table.rows.iter().enumerate() {
        let v = cell(row, i + 1, idx)?;
        if !v.is_empty() {
            seen.insert(v.to_owned());
        }
    }
    Ok(seen.into_iter().collect())
}

/// The first data row for each distinct non-empty value of `col`, in first-appearance order.
///
/// Later rows sharing a key are dropped, as are rows whose key is empty.
pub fn unique_records(table: Table, col: impl Into<ColumnRef>) -> TableResult<Table> {
    let idx = col.into().resolve(&table.header)?;
    dedup_by_position(table, idx, true)
}

/// First-occurrence dedup on a resolved position. Shared with the join's foreign side, which
/// keeps empty keys (an empty primary key can still match an empty foreign key).
pub(crate) fn dedup_by_position(table: Table, idx: usize, skip_empty: bool) -> TableResult<Table> {
    let Table { header, rows } = table;

    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();
    for (i, row) in rows.into_iter().enumerate() {
        let key = cell(&row, i + 1, idx)?;
        if skip_empty && key.is_empty() {
            continue;
        }
        if !seen.contains(key) {
            seen.insert(key.to_owned());
            out.push(row);
        }
    }
    Ok(Table::new(header, out))
}

#[cfg(test)]
mod tests {
    use super::{unique_records, unique_values};
    use crate::types::Table;

    fn stops() -> Table {
        Table::from_str_rows(&[
            &["route", "stop"],
            &["b", "1"],
            &["a", "2"],
            &["", "3"],
            &["b", "4"],
            &["c", "5"],
            &["a", "6"],
        ])
    }

    #[test]
    fn unique_values_sorted_without_empties_or_repeats() {
        let vals = unique_values(&stops(), "route").unwrap();
        assert_eq!(vals, vec!["a", "b", "c"]);
    }

    #[test]
    fn unique_values_equals_observed_non_empty_set() {
        let t = stops();
        let vals = unique_values(&t, 0usize).unwrap();
        let mut observed: Vec<String> = t
            .rows
            .iter()
            .map(|r| r[0].clone())
            .filter(|v| !v.is_empty())
            .collect();
        observed.sort();
        observed.dedup();
        assert_eq!(vals, observed);
    }

    #[test]
    fn unique_records_keeps_first_row_in_appearance_order() {
        let out = unique_records(stops(), "route").unwrap();
        assert_eq!(out.header, vec!["route".to_string(), "stop".to_string()]);
        let stops: Vec<&str> = out.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(stops, vec!["1", "2", "5"]);
    }

    #[test]
    fn unique_records_on_header_only_table() {
        let t = Table::from_str_rows(&[&["route"]]);
        let out = unique_records(t, "route").unwrap();
        assert_eq!(out.row_count(), 0);
        assert_eq!(out.column_count(), 1);
    }
}
