//! Delimited-text reader.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use encoding_rs::Encoding;

use crate::error::{TableError, TableResult};
use crate::types::{Row, Table};

use super::observability::{report, IoContext, IoOperation, IoSeverity, IoStats, TableIoObserver};

/// Options controlling how delimited text is read.
///
/// Use [`Default`] for comma-separated UTF-8.
#[derive(Clone)]
pub struct ReadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Encoding label understood by `encoding_rs` (e.g. `utf-8`, `windows-1252`, `latin1`).
    pub encoding: String,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn TableIoObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IoSeverity,
}

impl fmt::Debug for ReadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadOptions")
            .field("delimiter", &(self.delimiter as char))
            .field("encoding", &self.encoding)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            encoding: "utf-8".to_string(),
            observer: None,
            alert_at_or_above: IoSeverity::Critical,
        }
    }
}

/// Read a delimited text file into a [`Table`].
///
/// The file's literal structure is kept: no type coercion, empty cells stay empty strings,
/// ragged rows keep their own width. Blank lines are skipped. The first record becomes the
/// header.
///
/// When an observer is configured, success/failure/alerts are reported to it.
///
/// ```no_run
/// use rust_table_tools::ingestion::{read_table, ReadOptions};
///
/// # fn main() -> Result<(), rust_table_tools::TableError> {
/// let opts = ReadOptions {
///     delimiter: b';',
///     encoding: "windows-1252".to_string(),
///     ..Default::default()
/// };
/// let table = read_table("stations.csv", &opts)?;
/// println!("rows={}", table.row_count());
/// # Ok(())
/// # }
/// ```
pub fn read_table(path: impl AsRef<Path>, options: &ReadOptions) -> TableResult<Table> {
    let path = path.as_ref();
    let ctx = IoContext {
        path: path.to_path_buf(),
        operation: IoOperation::Read,
        delimiter: options.delimiter,
        encoding: Some(options.encoding.trim().to_owned()),
    };

    let result = std::fs::read(path)
        .map_err(TableError::from)
        .and_then(|bytes| read_table_from_bytes(&bytes, options.delimiter, &options.encoding));

    report(
        options.observer.as_ref(),
        options.alert_at_or_above,
        &ctx,
        IoStats::of,
        result,
    )
}

/// Decode `bytes` with the named encoding, then parse them as delimited text.
pub fn read_table_from_bytes(bytes: &[u8], delimiter: u8, encoding: &str) -> TableResult<Table> {
    let text = decode(bytes, encoding)?;
    read_table_from_reader(text.as_bytes(), delimiter)
}

/// Parse already-UTF-8 delimited text from any reader.
///
/// Blank lines are skipped rather than read as empty rows, so `"h\n\nx\n"` yields a single
/// data row `["x"]`. A line holding only a quoted empty field (`""`) is kept as `[""]`.
pub fn read_table_from_reader<R: Read>(reader: R, delimiter: u8) -> TableResult<Table> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Row> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(Table::from_rows(rows))
}

fn decode(bytes: &[u8], label: &str) -> TableResult<String> {
    let encoding =
        Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| TableError::UnknownEncoding {
            label: label.to_owned(),
        })?;
    let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(TableError::Decode {
            encoding: encoding.name().to_owned(),
        });
    }
    Ok(text.into_owned())
}
