//! `rust-table-tools` is a small in-memory table engine for CSV-shaped data.
//!
//! A [`types::Table`] is a header row plus ordered data rows of opaque text cells. The
//! [`processing`] layer implements relational-style transforms over it without a backing
//! database:
//!
//! - column lookup by name or position ([`types::ColumnRef`], [`processing::index_columns`])
//! - selection by required fields or by one column's value
//! - first-occurrence dedup and sorted distinct values
//! - stable sort by one column
//! - column projection (keep/drop) and reordering selection
//! - concatenation with a `SourceFile` provenance column, multi-row header normalization
//! - left outer join on a key pair
//!
//! ## Modules
//!
//! - [`types`]: table and column reference types
//! - [`processing`]: the table transforms
//! - [`ingestion`]: reading delimited files and folders into tables, plus I/O observers
//! - [`output`]: writing tables back out
//! - [`execution`]: batch column reduction over a folder, run on a thread pool
//! - [`error`]: the error type shared by everything above
//!
//! ## Quick example: read, join, write
//!
//! ```no_run
//! use rust_table_tools::ingestion::{read_table, ReadOptions};
//! use rust_table_tools::output::{write_table, WriteOptions};
//! use rust_table_tools::processing::{left_join, required_fields};
//!
//! # fn main() -> Result<(), rust_table_tools::TableError> {
//! let stations = read_table("stations.csv", &ReadOptions::default())?;
//! let readings = read_table("readings.csv", &ReadOptions::default())?;
//!
//! let stations = required_fields(stations, &["lat", "lon"])?;
//! let joined = left_join(stations, &readings, "station_id", "id")?;
//!
//! write_table("joined.csv", &joined, &WriteOptions::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Ownership
//!
//! [`processing::project`] and [`processing::select_columns`] borrow their input and return a
//! copy. Every other transform takes the table by value and returns the result; clone first
//! when the original is still needed.

pub mod error;
pub mod execution;
pub mod ingestion;
pub mod output;
pub mod processing;
pub mod types;

pub use error::{TableError, TableResult};
