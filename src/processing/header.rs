//! Column name to position resolution.

use crate::error::{TableError, TableResult};
use crate::types::{ColumnRef, Row};

/// Resolve column names to zero-based positions, preserving the requested order.
///
/// Lookup takes the first matching header cell. Fails with [`TableError::ColumnNotFound`] on the
/// first name that is absent.
pub fn index_columns<S: AsRef<str>>(header: &[String], names: &[S]) -> TableResult<Vec<usize>> {
    names
        .iter()
        .map(|name| index_column(header, name.as_ref()))
        .collect()
}

/// Resolve a single column name.
pub fn index_column(header: &[String], name: &str) -> TableResult<usize> {
    header
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| TableError::ColumnNotFound {
            column: name.to_owned(),
            headers: header.to_vec(),
        })
}

impl ColumnRef {
    /// Resolve this reference against a header row.
    ///
    /// Names go through [`index_column`]. Positions bypass name lookup but must exist in the
    /// header, otherwise [`TableError::RowShape`] is returned for row 0.
    pub fn resolve(&self, header: &[String]) -> TableResult<usize> {
        match self {
            ColumnRef::Name(name) => index_column(header, name),
            ColumnRef::Index(idx) if *idx < header.len() => Ok(*idx),
            ColumnRef::Index(idx) => Err(TableError::RowShape {
                row: 0,
                column: *idx,
                width: header.len(),
            }),
        }
    }
}

/// Resolve a list of column references in order.
pub fn resolve_columns<C>(header: &[String], cols: &[C]) -> TableResult<Vec<usize>>
where
    C: Clone + Into<ColumnRef>,
{
    cols.iter()
        .map(|c| c.clone().into().resolve(header))
        .collect()
}

/// Borrow the cell at `idx`, or fail with [`TableError::RowShape`] tagged with `row_no`.
pub(crate) fn cell(row: &Row, row_no: usize, idx: usize) -> TableResult<&str> {
    row.get(idx)
        .map(String::as_str)
        .ok_or(TableError::RowShape {
            row: row_no,
            column: idx,
            width: row.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::{index_column, index_columns, resolve_columns};
    use crate::error::TableError;
    use crate::types::{ColumnRef, Table};

    fn header() -> Vec<String> {
        Table::from_str_rows(&[&["id", "name", "lat", "lon"]]).header
    }

    #[test]
    fn index_columns_preserves_requested_order() {
        let idx = index_columns(&header(), &["lon", "id", "name"]).unwrap();
        assert_eq!(idx, vec![3, 0, 1]);
    }

    #[test]
    fn index_columns_errors_on_missing_name() {
        let err = index_columns(&header(), &["id", "elevation"]).unwrap_err();
        match err {
            TableError::ColumnNotFound { column, headers } => {
                assert_eq!(column, "elevation");
                assert_eq!(headers.len(), 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_header_names_resolve_to_first_match() {
        let h = Table::from_str_rows(&[&["a", "b", "a"]]).header;
        assert_eq!(index_column(&h, "a").unwrap(), 0);
    }

    #[test]
    fn column_ref_positions_bypass_lookup_but_are_bounds_checked() {
        let h = header();
        assert_eq!(ColumnRef::Index(2).resolve(&h).unwrap(), 2);
        assert!(matches!(
            ColumnRef::Index(9).resolve(&h),
            Err(TableError::RowShape { row: 0, column: 9, width: 4 })
        ));
    }

    #[test]
    fn resolve_columns_accepts_mixed_refs() {
        let cols = vec![ColumnRef::from("lat"), ColumnRef::from(0usize)];
        assert_eq!(resolve_columns(&header(), &cols).unwrap(), vec![2, 0]);
    }
}
