use crate::counters::RemovalCounters;
use crate::file_finder::{RunConfig, find_files};
use crate::stripper::{self, decode_ascii};
use crate::CoreError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFileResult {
    pub path: PathBuf,
    pub counts: RemovalCounters,
    pub modified: bool,
}

fn io_err(path: &Path) -> impl Fn(std::io::Error) -> CoreError {
    let path = path.to_path_buf();
    move |source| CoreError::Io {
        path: path.clone(),
        source,
    }
}

/// Read, strip and rewrite one file. Unchanged files are not rewritten.
pub fn process_single_file(
    path: &Path,
    remove_suppress_warnings: bool,
) -> Result<ProcessedFileResult, CoreError> {
    let bytes = fs::read(path).map_err(io_err(path))?;
    let content = decode_ascii(bytes).map_err(|source| CoreError::from_strip(path, source))?;

    let outcome = stripper::strip_annotations(&content, remove_suppress_warnings)
        .map_err(|source| CoreError::from_strip(path, source))?;

    let modified = outcome.is_modified();
    if modified {
        fs::write(path, outcome.content.as_bytes()).map_err(io_err(path))?;
    }
    debug!(
        path = %path.display(),
        removed = outcome.counts.total(),
        modified,
        "stripped"
    );

    Ok(ProcessedFileResult {
        path: path.to_path_buf(),
        counts: outcome.counts,
        modified,
    })
}

/// Processes `files` in order and stops at the first failure. Files handled
/// before the failure keep their new content.
pub fn process_files<F>(
    files: &[PathBuf],
    remove_suppress_warnings: bool,
    mut on_processed: F,
) -> Result<RemovalCounters, CoreError>
where
    F: FnMut(&ProcessedFileResult),
{
    let mut totals = RemovalCounters::new();
    for path in files {
        let result = process_single_file(path, remove_suppress_warnings)?;
        totals += result.counts;
        on_processed(&result);
    }
    Ok(totals)
}

pub fn strip_tree<F>(config: &RunConfig, on_processed: F) -> Result<RemovalCounters, CoreError>
where
    F: FnMut(&ProcessedFileResult),
{
    let files = find_files(&config.src_directory)?;
    info!(
        root = %config.src_directory.display(),
        files = files.len(),
        remove_suppress_warnings = config.remove_suppress_warnings,
        "starting run"
    );
    let totals = process_files(&files, config.remove_suppress_warnings, on_processed)?;
    info!(removed = totals.total(), "run complete");
    Ok(totals)
}
