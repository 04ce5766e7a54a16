//! Table output: delimited text and plain text files.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use crate::error::TableResult;
use crate::ingestion::observability::{
    report, IoContext, IoOperation, IoSeverity, IoStats, TableIoObserver,
};
use crate::types::Table;

/// Options controlling how a table is written.
#[derive(Clone)]
pub struct WriteOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn TableIoObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IoSeverity,
}

impl fmt::Debug for WriteOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WriteOptions")
            .field("delimiter", &(self.delimiter as char))
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            observer: None,
            alert_at_or_above: IoSeverity::Critical,
        }
    }
}

/// Write `table` to `path`, creating or truncating the file.
///
/// Rows end in `\n` on every platform. Ragged rows are written at their own width.
pub fn write_table(path: impl AsRef<Path>, table: &Table, options: &WriteOptions) -> TableResult<()> {
    let path = path.as_ref();
    let ctx = IoContext {
        path: path.to_path_buf(),
        operation: IoOperation::Write,
        delimiter: options.delimiter,
        encoding: None,
    };

    let result = std::fs::File::create(path)
        .map_err(Into::into)
        .and_then(|file| write_table_to_writer(file, table, options.delimiter));

    report(
        options.observer.as_ref(),
        options.alert_at_or_above,
        &ctx,
        |_| IoStats::of(table),
        result,
    )
}

/// Serialize `table` (header first) to any writer.
pub fn write_table_to_writer<W: Write>(writer: W, table: &Table, delimiter: u8) -> TableResult<()> {
    let mut wtr = ::csv::WriterBuilder::new()
        .delimiter(delimiter)
        .terminator(::csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(writer);

    wtr.write_record(&table.header)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a string to `path`, creating or truncating the file.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> TableResult<()> {
    std::fs::write(path, content)?;
    Ok(())
}
