//! Reading every delimited file in a folder.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{TableError, TableResult};
use crate::processing::concat_with_source;
use crate::types::Table;

use super::csv::{read_table, ReadOptions};

/// Options controlling which files a directory scan picks up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOptions {
    /// File extension to match, without the dot. Compared case-insensitively.
    pub extension: String,
    /// Descend into subfolders.
    pub recursive: bool,
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self {
            extension: "csv".to_string(),
            recursive: false,
        }
    }
}

/// List matching files under `dir`, sorted by file name then full path.
pub fn list_csv_files(dir: impl AsRef<Path>, options: &DirectoryOptions) -> TableResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(TableError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("not a directory: {}", dir.display()),
        )));
    }

    let mut files = if options.recursive {
        let mut out = Vec::new();
        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = entry?;
            if entry.file_type().is_file() && has_extension(entry.path(), &options.extension) {
                out.push(entry.into_path());
            }
        }
        out
    } else {
        let escaped = glob::Pattern::escape(&dir.to_string_lossy());
        let pattern = format!("{escaped}/*");
        let mut out = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| TableError::Io(e.into_error()))?;
            if path.is_file() && has_extension(&path, &options.extension) {
                out.push(path);
            }
        }
        out
    };

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
    Ok(files)
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Read every matching file under `dir` into `(file name, table)` pairs.
///
/// Files are parsed in parallel; the result keeps the [`list_csv_files`] order. The first
/// failure aborts the whole read.
pub fn read_directory(
    dir: impl AsRef<Path>,
    dir_options: &DirectoryOptions,
    read_options: &ReadOptions,
) -> TableResult<Vec<(String, Table)>> {
    let files = list_csv_files(dir, dir_options)?;
    files
        .par_iter()
        .map(|path| {
            let label = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            read_table(path, read_options).map(|t| (label, t))
        })
        .collect()
}

/// Read every matching file under `dir` and concatenate them with a `SourceFile` column.
///
/// See [`concat_with_source`] for the shape rules.
pub fn combine_directory(
    dir: impl AsRef<Path>,
    dir_options: &DirectoryOptions,
    read_options: &ReadOptions,
) -> TableResult<Table> {
    let tables = read_directory(dir, dir_options, read_options)?;
    Ok(concat_with_source(tables))
}
