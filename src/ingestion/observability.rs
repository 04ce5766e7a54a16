use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{TableError, TableResult};
use crate::types::Table;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IoSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal).
    Warning,
    /// Error-level event (operation failed).
    Error,
    /// Critical error (typically I/O or other infrastructure failures).
    Critical,
}

/// Direction of a table I/O call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    /// Delimited text read into a [`Table`].
    Read,
    /// [`Table`] serialized to delimited text.
    Write,
}

/// Context about a table read or write.
#[derive(Debug, Clone)]
pub struct IoContext {
    /// The file path read from or written to.
    pub path: PathBuf,
    /// Read or write.
    pub operation: IoOperation,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Encoding label the bytes were decoded with. Writes are always UTF-8 and carry `None`.
    pub encoding: Option<String>,
}

impl fmt::Display for IoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "op={:?} path={} delim={:?}",
            self.operation,
            self.path.display(),
            self.delimiter as char
        )?;
        if let Some(enc) = &self.encoding {
            write!(f, " enc={enc}")?;
        }
        Ok(())
    }
}

/// Minimal stats reported on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoStats {
    /// Number of data rows (header excluded).
    pub rows: usize,
    /// Header width.
    pub columns: usize,
}

impl IoStats {
    pub(crate) fn of(table: &Table) -> Self {
        Self {
            rows: table.row_count(),
            columns: table.column_count(),
        }
    }
}

/// Observer interface for table I/O outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait TableIoObserver: Send + Sync {
    /// Called when a read or write succeeds.
    fn on_success(&self, _ctx: &IoContext, _stats: IoStats) {}

    /// Called when a read or write fails.
    fn on_failure(&self, _ctx: &IoContext, _severity: IoSeverity, _error: &TableError) {}

    /// Called when a failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Report `result` to `observer`, then hand it back unchanged.
pub(crate) fn report<T>(
    observer: Option<&Arc<dyn TableIoObserver>>,
    alert_at_or_above: IoSeverity,
    ctx: &IoContext,
    stats: impl FnOnce(&T) -> IoStats,
    result: TableResult<T>,
) -> TableResult<T> {
    if let Some(obs) = observer {
        match &result {
            Ok(v) => obs.on_success(ctx, stats(v)),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(ctx, sev, e);
                if sev >= alert_at_or_above {
                    obs.on_alert(ctx, sev, e);
                }
            }
        }
    }
    result
}

/// I/O failures are infrastructure problems; everything else is a data or caller error.
pub fn severity_for_error(e: &TableError) -> IoSeverity {
    match e {
        TableError::Io(_) | TableError::Walk(_) => IoSeverity::Critical,
        TableError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IoSeverity::Critical,
            _ => IoSeverity::Error,
        },
        TableError::ColumnNotFound { .. }
        | TableError::RowShape { .. }
        | TableError::InvalidArgument { .. }
        | TableError::UnknownEncoding { .. }
        | TableError::Decode { .. }
        | TableError::Json(_)
        | TableError::Pattern(_) => IoSeverity::Error,
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn TableIoObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn TableIoObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl TableIoObserver for CompositeObserver {
    fn on_success(&self, ctx: &IoContext, stats: IoStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs table I/O events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl TableIoObserver for StdErrObserver {
    fn on_success(&self, ctx: &IoContext, stats: IoStats) {
        eprintln!(
            "[table][ok] {} rows={} cols={}",
            ctx,
            stats.rows,
            stats.columns
        );
    }

    fn on_failure(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        eprintln!(
            "[table][{:?}] {} err={}",
            severity,
            ctx,
            error
        );
    }

    fn on_alert(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        eprintln!(
            "[ALERT][table][{:?}] {} err={}",
            severity,
            ctx,
            error
        );
    }
}

/// Appends table I/O events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl TableIoObserver for FileObserver {
    fn on_success(&self, ctx: &IoContext, stats: IoStats) {
        self.append_line(&format!(
            "{} ok {} rows={} cols={}",
            unix_ts(),
            ctx,
            stats.rows,
            stats.columns
        ));
    }

    fn on_failure(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        self.append_line(&format!(
            "{} fail severity={:?} {} err={}",
            unix_ts(),
            severity,
            ctx,
            error
        ));
    }

    fn on_alert(&self, ctx: &IoContext, severity: IoSeverity, error: &TableError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} {} err={}",
            unix_ts(),
            severity,
            ctx,
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
