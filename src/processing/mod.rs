//! In-memory table transformations.
//!
//! The processing layer operates on [`crate::types::Table`] values produced by ingestion.
//! Every operation is a single synchronous pass with no state kept between calls.
//!
//! Ownership: [`project()`] and [`select_columns()`] borrow their input and return a fresh
//! copy. All other transforms take the table by value and hand back the transformed table, so
//! the caller clones first if the original is still needed.
//!
//! Currently implemented:
//!
//! - [`header`]: column name → position lookup
//! - [`required_fields()`], [`attribute_filter()`]: row selection
//! - [`unique_values()`], [`unique_records()`]: dedup by key column
//! - [`sort_by_column()`]: stable sort by one column
//! - [`project()`], [`select_columns()`]: column reduction
//! - [`concat_with_source()`], [`concat_tables()`], [`single_header()`], [`add_generic_header()`]: combining tables
//! - [`left_join()`]: left outer join on a key pair
//!
//! ## Example: filter → dedup → sort → project → join
//!
//! ```rust
//! use rust_table_tools::processing::{
//!     left_join, project, required_fields, sort_by_column, unique_records, Projection,
//! };
//! use rust_table_tools::types::Table;
//!
//! # fn main() -> Result<(), rust_table_tools::TableError> {
//! let sites = Table::from_str_rows(&[
//!     &["id", "name", "lat", "note"],
//!     &["2", "Dock", "-33.9", "old"],
//!     &["1", "Pier", "-33.8", ""],
//!     &["1", "Pier", "-33.8", "dup"],
//!     &["3", "", "-33.7", ""],
//! ]);
//! let scores = Table::from_str_rows(&[&["site", "score"], &["1", "10"], &["2", "7"]]);
//!
//! let t = required_fields(sites, &["name"])?;
//! let t = unique_records(t, "id")?;
//! let t = sort_by_column(t, "id")?;
//! let t = project(&t, &["note"], Projection::Remove)?;
//! let joined = left_join(t, &scores, "id", "site")?;
//!
//! assert_eq!(joined.header, vec!["id", "name", "lat", "score"]);
//! assert_eq!(joined.rows[0], vec!["1", "Pier", "-33.8", "10"]);
//! assert_eq!(joined.rows[1], vec!["2", "Dock", "-33.9", "7"]);
//! # Ok(())
//! # }
//! ```

pub mod combine;
pub mod dedup;
pub mod filter;
pub mod header;
pub mod join;
pub mod project;
pub mod sort;

pub use combine::{
    add_generic_header, concat_tables, concat_with_source, single_header, SOURCE_COLUMN,
};
pub use dedup::{unique_records, unique_values};
pub use filter::{attribute_filter, required_fields};
pub use header::{index_column, index_columns, resolve_columns};
pub use join::{left_join, left_join_with, JoinOptions, JoinPlacement, MissingMatch};
pub use project::{project, select_columns, Projection};
pub use sort::{sort_by_column, sort_by_column_with, SortOptions, SortOrder};
