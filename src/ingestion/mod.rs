//! Table input: delimited text files and folders of them.
//!
//! Most callers should use [`read_table`], which:
//!
//! - decodes the file with the requested encoding and splits it on the requested delimiter
//! - keeps the literal textual structure (every cell is a string, empty cells stay empty)
//! - optionally reports success/failure/alerts to a [`TableIoObserver`]
//!
//! Folder helpers live in [`directory`]: [`list_csv_files`], [`read_directory`] and
//! [`combine_directory`].

pub mod csv;
pub mod directory;
pub mod observability;

pub use csv::{read_table, read_table_from_bytes, read_table_from_reader, ReadOptions};
pub use directory::{combine_directory, list_csv_files, read_directory, DirectoryOptions};
pub use observability::{
    severity_for_error, CompositeObserver, FileObserver, IoContext, IoOperation, IoSeverity, IoStats,
    StdErrObserver, TableIoObserver,
};
