use thiserror::Error;

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Error type returned by table transforms and table I/O.
///
/// This is a single error enum shared across the processing, ingestion and output layers.
#[derive(Debug, Error)]
pub enum TableError {
    /// A requested column name has no match in the header row.
    #[error("column not found: '{column}'. headers={headers:?}")]
    ColumnNotFound { column: String, headers: Vec<String> },

    /// A row was indexed beyond its own length. `row` is 0 for the header row.
    #[error("row {row} has {width} cells; cannot index column {column}")]
    RowShape {
        row: usize,
        column: usize,
        width: usize,
    },

    /// An argument is out of the range the operation accepts.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The requested text encoding label is not recognised.
    #[error("unknown encoding label '{label}'")]
    UnknownEncoding { label: String },

    /// Input bytes are not valid in the requested encoding.
    #[error("input is not valid {encoding}")]
    Decode { encoding: String },

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited-text read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Job configuration could not be parsed.
    #[error("config error: {0}")]
    Json(#[from] serde_json::Error),

    /// A directory listing pattern was malformed.
    #[error("glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Recursive directory walk failed.
    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}
