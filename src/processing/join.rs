//! Left outer join of a primary table with a foreign table.

use std::collections::HashMap;

use crate::error::TableResult;
use crate::types::{ColumnRef, Row, Table};

use super::dedup::dedup_by_position;
use super::header::cell;

/// Where foreign columns land in the joined rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinPlacement {
    /// After the last primary column.
    #[default]
    Append,
    /// Immediately after the primary key column, in foreign-header order.
    AfterKey,
}

/// What an unmatched primary row receives in place of foreign cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingMatch {
    /// A single empty cell, whatever the number of foreign columns. Unmatched rows end up
    /// narrower than the joined header whenever the foreign side contributes more than one
    /// column.
    #[default]
    SingleCell,
    /// One empty cell per foreign non-key column, so every row matches the header width.
    PadToWidth,
}

/// Options for [`left_join_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinOptions {
    pub placement: JoinPlacement,
    pub missing: MissingMatch,
}

/// Left join with default [`JoinOptions`] (append, single placeholder cell).
pub fn left_join(
    primary: Table,
    foreign: &Table,
    primary_key: impl Into<ColumnRef>,
    foreign_key: impl Into<ColumnRef>,
) -> TableResult<Table> {
    left_join_with(primary, foreign, primary_key, foreign_key, &JoinOptions::default())
}

/// Merge foreign columns into every primary row whose key matches.
///
/// - Every primary row survives, in order; unmatched foreign rows are dropped.
/// - Keys match on exact string equality.
/// - The first foreign row for a key wins; later duplicates are ignored, so each primary row
///   gains at most one set of foreign cells.
/// - The foreign key column itself is not copied.
pub fn left_join_with(
    primary: Table,
    foreign: &Table,
    primary_key: impl Into<ColumnRef>,
    foreign_key: impl Into<ColumnRef>,
    options: &JoinOptions,
) -> TableResult<Table> {
    let p_key = primary_key.into().resolve(&primary.header)?;
    let f_key = foreign_key.into().resolve(&foreign.header)?;

    let insert_at = match options.placement {
        JoinPlacement::Append => None,
        JoinPlacement::AfterKey => Some(p_key + 1),
    };

    let foreign_cols = without_position(&foreign.header, f_key);
    let header = splice(primary.header, insert_at, foreign_cols.clone());

    let foreign = dedup_by_position(foreign.clone(), f_key, false)?;
    let mut lookup: HashMap<&str, &Row> = HashMap::with_capacity(foreign.rows.len());
    for row in &foreign.rows {
        lookup.insert(row[f_key].as_str(), row);
    }

    let placeholder: Row = match options.missing {
        MissingMatch::SingleCell => vec![String::new()],
        MissingMatch::PadToWidth => vec![String::new(); foreign_cols.len()],
    };

    let mut rows = Vec::with_capacity(primary.rows.len());
    for (i, row) in primary.rows.into_iter().enumerate() {
        let key = cell(&row, i + 1, p_key)?;
        let extra = match lookup.get(key) {
            Some(f_row) => without_position(f_row, f_key),
            None => placeholder.clone(),
        };
        rows.push(splice(row, insert_at, extra));
    }

    Ok(Table::new(header, rows))
}

fn without_position(row: &Row, skip: usize) -> Row {
    row.iter()
        .enumerate()
        .filter(|(i, _)| *i != skip)
        .map(|(_, c)| c.clone())
        .collect()
}

fn splice(mut row: Row, at: Option<usize>, cells: Row) -> Row {
    match at {
        Some(at) if at <= row.len() => {
            row.splice(at..at, cells);
        }
        _ => row.extend(cells),
    }
    row
}

#[cfg(test)]
mod tests {
    use super::{left_join, left_join_with, JoinOptions, JoinPlacement, MissingMatch};
    use crate::error::TableError;
    use crate::types::Table;

    fn primary() -> Table {
        Table::from_str_rows(&[&["id", "name"], &["1", "a"], &["2", "b"]])
    }

    fn foreign() -> Table {
        Table::from_str_rows(&[&["id", "score"], &["1", "10"], &["1", "99"], &["3", "5"]])
    }

    #[test]
    fn first_foreign_match_wins_and_missing_gets_placeholder() {
        let out = left_join(primary(), &foreign(), "id", "id").unwrap();
        assert_eq!(out.header, vec!["id", "name", "score"]);
        assert_eq!(out.rows, vec![vec!["1", "a", "10"], vec!["2", "b", ""]]);
    }

    #[test]
    fn row_count_always_matches_primary() {
        let p = Table::from_str_rows(&[&["k"], &["x"], &["x"], &["y"], &[""]]);
        let f = Table::from_str_rows(&[&["k", "v"], &["z", "1"]]);
        let out = left_join(p.clone(), &f, "k", "k").unwrap();
        assert_eq!(out.row_count(), p.row_count());
    }

    #[test]
    fn foreign_cells_follow_foreign_header_order() {
        let p = Table::from_str_rows(&[&["site", "name"], &["s1", "Pier"]]);
        let f = Table::from_str_rows(&[
            &["lat", "code", "lon", "elev"],
            &["-33.8", "s1", "151.2", "4"],
        ]);
        let out = left_join(p, &f, "site", "code").unwrap();
        assert_eq!(out.header, vec!["site", "name", "lat", "lon", "elev"]);
        assert_eq!(out.rows[0], vec!["s1", "Pier", "-33.8", "151.2", "4"]);
    }

    #[test]
    fn foreign_key_is_dropped_by_position_not_value() {
        let p = Table::from_str_rows(&[&["id"], &["7"]]);
        let f = Table::from_str_rows(&[&["id", "copy"], &["7", "7"]]);
        let out = left_join(p, &f, "id", "id").unwrap();
        assert_eq!(out.rows[0], vec!["7", "7"]);
    }

    #[test]
    fn after_key_inserts_next_to_primary_key() {
        let p = Table::from_str_rows(&[&["name", "id", "note"], &["a", "1", "n1"], &["b", "2", "n2"]]);
        let f = Table::from_str_rows(&[&["id", "x", "y"], &["1", "x1", "y1"]]);
        let opts = JoinOptions {
            placement: JoinPlacement::AfterKey,
            ..Default::default()
        };
        let out = left_join_with(p, &f, "id", "id", &opts).unwrap();
        assert_eq!(out.header, vec!["name", "id", "x", "y", "note"]);
        assert_eq!(out.rows[0], vec!["a", "1", "x1", "y1", "n1"]);
        assert_eq!(out.rows[1], vec!["b", "2", "", "n2"]);
    }

    #[test]
    fn pad_to_width_keeps_rows_rectangular() {
        let f = Table::from_str_rows(&[&["id", "x", "y"], &["1", "x1", "y1"]]);
        let opts = JoinOptions {
            missing: MissingMatch::PadToWidth,
            ..Default::default()
        };
        let out = left_join_with(primary(), &f, "id", "id", &opts).unwrap();
        assert!(out.rows.iter().all(|r| r.len() == out.header.len()));
        assert_eq!(out.rows[1], vec!["2", "b", "", ""]);
    }

    #[test]
    fn join_errors_on_missing_key_column() {
        let err = left_join(primary(), &foreign(), "id", "code").unwrap_err();
        assert!(matches!(err, TableError::ColumnNotFound { ref column, .. } if column == "code"));
    }

    #[test]
    fn join_reports_short_primary_rows() {
        let p = Table::from_str_rows(&[&["name", "id"], &["a"]]);
        let err = left_join(p, &foreign(), "id", "id").unwrap_err();
        assert!(matches!(err, TableError::RowShape { row: 1, column: 1, width: 1 }));
    }
}
