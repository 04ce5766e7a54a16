//! Batch column reduction over a folder of delimited files.
//!
//! A [`ReduceJob`] describes the work (usually loaded from JSON); a [`ReduceRunner`] executes it
//! on a `rayon` pool and reports progress:
//!
//! - For every matching file in `folder`, keep `columns` (in the order given) and write
//!   `<stem>_slim.<ext>` into `folder/<subfolder>`.
//! - The output subfolder is cleared and recreated on each run, so a previous run's output
//!   never leaks into the combined file.
//! - With `combine = true`, the reduced tables are also concatenated (header once) into
//!   `<subfolder>_combined.<ext>`.
//!
//! Source files are never modified.
//!
//! ```no_run
//! use rust_table_tools::execution::{ReduceJob, ReduceRunner, ExecutionOptions};
//!
//! # fn main() -> Result<(), rust_table_tools::TableError> {
//! let job = ReduceJob::from_json_str(r#"{ "folder": "data", "columns": [0, "lat", "lon"] }"#)?;
//! let report = ReduceRunner::new(ExecutionOptions::default())?.run(&job)?;
//! println!("reduced {} files into {}", report.outputs.len(), report.output_dir.display());
//! # Ok(())
//! # }
//! ```

mod observer;

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::ingestion::{list_csv_files, read_table, DirectoryOptions, ReadOptions};
use crate::output::{write_table, WriteOptions};
use crate::processing::{concat_tables, select_columns};
use crate::types::{ColumnRef, Table};

pub use observer::{
    ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver, StdErrExecutionObserver,
};

/// Description of a batch column-reduction job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReduceJob {
    /// Folder holding the input files.
    pub folder: PathBuf,
    /// Output subfolder name, created under `folder`.
    #[serde(default = "default_subfolder")]
    pub subfolder: String,
    /// Columns to keep, by position or name, in output order.
    pub columns: Vec<ColumnRef>,
    /// Also write one combined file of every reduced table.
    #[serde(default = "default_combine")]
    pub combine: bool,
    /// Input/output file extension, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Field delimiter for both reading and writing.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Input encoding label.
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_subfolder() -> String {
    "Reduced".to_string()
}

fn default_combine() -> bool {
    true
}

fn default_extension() -> String {
    "csv".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

impl ReduceJob {
    /// A job with default settings for everything but the folder and columns.
    pub fn new(folder: impl Into<PathBuf>, columns: Vec<ColumnRef>) -> Self {
        Self {
            folder: folder.into(),
            subfolder: default_subfolder(),
            columns,
            combine: default_combine(),
            extension: default_extension(),
            delimiter: default_delimiter(),
            encoding: default_encoding(),
        }
    }

    /// Parse a job from JSON text.
    pub fn from_json_str(s: &str) -> TableResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a job from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> TableResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Directory the reduced files are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.folder.join(&self.subfolder)
    }

    /// The output folder, checked to be a direct child of `folder`.
    ///
    /// The runner deletes and recreates this folder, so `""`, `"."`, `".."`, absolute paths and
    /// nested paths are rejected.
    fn checked_output_dir(&self) -> TableResult<PathBuf> {
        let mut components = Path::new(&self.subfolder).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.output_dir()),
            _ => Err(TableError::InvalidArgument {
                message: format!(
                    "subfolder {:?} must be a single folder name inside {}",
                    self.subfolder,
                    self.folder.display()
                ),
            }),
        }
    }

    fn delimiter_byte(&self) -> TableResult<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| TableError::InvalidArgument {
                message: format!("delimiter {:?} is not a single ASCII byte", self.delimiter),
            })
    }
}

/// What a [`ReduceRunner::run`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReduceReport {
    /// The (recreated) output folder.
    pub output_dir: PathBuf,
    /// One reduced file per input, in input order.
    pub outputs: Vec<PathBuf>,
    /// Data rows written across the reduced files.
    pub rows_written: usize,
    /// The combined file, when requested and at least one input existed.
    pub combined: Option<PathBuf>,
}

/// Configuration for the [`ReduceRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    /// Number of worker threads used for per-file work.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        let n = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Self { num_threads: Some(n) }
    }
}

/// Runs [`ReduceJob`]s on a dedicated thread pool.
pub struct ReduceRunner {
    pool: ThreadPool,
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl ReduceRunner {
    /// Create a runner. Fails if `num_threads == Some(0)` or the pool cannot be built.
    pub fn new(opts: ExecutionOptions) -> TableResult<Self> {
        if opts.num_threads == Some(0) {
            return Err(TableError::InvalidArgument {
                message: "num_threads must be > 0 when set".to_string(),
            });
        }

        let n_threads = opts
            .num_threads
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1));

        let pool = ThreadPoolBuilder::new()
            .num_threads(n_threads)
            .build()
            .map_err(|e| TableError::InvalidArgument {
                message: format!("failed to build thread pool: {e}"),
            })?;

        Ok(Self {
            pool,
            observer: None,
            metrics: Arc::new(ExecutionMetrics::new()),
        })
    }

    /// Attach an observer for execution events.
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Execute `job`. The first failing file aborts the run.
    pub fn run(&self, job: &ReduceJob) -> TableResult<ReduceReport> {
        let start = Instant::now();
        self.metrics.begin_run();

        let output_dir = job.checked_output_dir()?;
        let delimiter = job.delimiter_byte()?;
        let read_opts = ReadOptions {
            delimiter,
            encoding: job.encoding.clone(),
            ..Default::default()
        };
        let write_opts = WriteOptions {
            delimiter,
            ..Default::default()
        };

        if output_dir.exists() {
            std::fs::remove_dir_all(&output_dir)?;
        }
        std::fs::create_dir_all(&output_dir)?;

        let dir_opts = DirectoryOptions {
            extension: job.extension.clone(),
            recursive: false,
        };
        let inputs = list_csv_files(&job.folder, &dir_opts)?;
        self.emit(ExecutionEvent::RunStarted { files: inputs.len() });

        let reduced: Vec<(PathBuf, Table)> = self.pool.install(|| {
            inputs
                .par_iter()
                .map(|input| self.reduce_file(job, input, &output_dir, &read_opts, &write_opts))
                .collect::<TableResult<Vec<_>>>()
        })?;

        let rows_written = reduced.iter().map(|(_, t)| t.row_count()).sum();
        let (outputs, tables): (Vec<PathBuf>, Vec<Table>) = reduced.into_iter().unzip();

        let combined = if job.combine && !tables.is_empty() {
            let path = output_dir.join(format!("{}_combined.{}", job.subfolder, job.extension));
            let all = concat_tables(tables);
            write_table(&path, &all, &write_opts)?;
            self.emit(ExecutionEvent::CombinedWritten {
                path: path.clone(),
                rows: all.row_count(),
            });
            Some(path)
        } else {
            None
        };

        self.metrics.end_run(start.elapsed());
        self.emit(ExecutionEvent::RunFinished {
            elapsed: start.elapsed(),
            metrics: self.metrics.snapshot(),
        });

        Ok(ReduceReport {
            output_dir,
            outputs,
            rows_written,
            combined,
        })
    }

    fn reduce_file(
        &self,
        job: &ReduceJob,
        input: &Path,
        output_dir: &Path,
        read_opts: &ReadOptions,
        write_opts: &WriteOptions,
    ) -> TableResult<(PathBuf, Table)> {
        self.metrics.on_file_start();
        self.emit(ExecutionEvent::FileStarted {
            path: input.to_path_buf(),
        });

        let table = read_table(input, read_opts)?;
        let slim = select_columns(&table, &job.columns)?;

        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let output = output_dir.join(format!("{stem}_slim.{}", job.extension));
        write_table(&output, &slim, write_opts)?;

        self.metrics.on_file_end(slim.row_count());
        self.emit(ExecutionEvent::FileReduced {
            input: input.to_path_buf(),
            output: output.clone(),
            rows: slim.row_count(),
        });
        Ok((output, slim))
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
