//! # annolint-cli
//!
//! Host integration for annolint: file discovery, parallel per-file
//! checking, and rendering. The binary in `main.rs` is a thin clap wrapper
//! over [`run_check`].

pub mod discovery;
pub mod output;

use rayon::prelude::*;
use tracing::info;

use annolint_core::{CheckConfig, Diagnostic};
use annolint_error::Result;
use annolint_python::{SourceFile, check_source};

/// Resolved options for one checker invocation.
#[derive(Debug, Clone, Default)]
pub struct AnnolintOptions {
    /// Individual files to check.
    pub files: Vec<String>,
    /// Directories to scan recursively for Python files.
    pub dirs: Vec<String>,
    /// Checker configuration assembled from the flag surface.
    pub config: CheckConfig,
}

/// Outcome for a single file: its diagnostic stream, or the error that made
/// the file unprocessable. One file failing never stops the run.
#[derive(Debug)]
pub struct FileReport {
    pub path: String,
    pub result: Result<Vec<Diagnostic>>,
}

impl FileReport {
    pub fn diagnostic_count(&self) -> usize {
        self.result.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn is_failed(&self) -> bool {
        self.result.is_err()
    }
}

/// Check a single file on disk.
pub fn check_file(path: &str, config: &CheckConfig) -> Result<Vec<Diagnostic>> {
    let source = SourceFile::from_path(path)?;
    check_source(&source, config)
}

/// Discover inputs and check them, in parallel across files.
///
/// Reports come back in discovery order regardless of which worker finished
/// first, keeping output deterministic.
pub fn run_check(opts: &AnnolintOptions) -> Result<Vec<FileReport>> {
    let files = discovery::discover_files(&opts.files, &opts.dirs)?;

    let check_start = std::time::Instant::now();
    let reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| FileReport {
            path: path.clone(),
            result: check_file(path, &opts.config),
        })
        .collect();

    let total: usize = reports.iter().map(FileReport::diagnostic_count).sum();
    info!(
        "Checked {} files in {:.2}s ({} findings)",
        reports.len(),
        check_start.elapsed().as_secs_f64(),
        total
    );

    Ok(reports)
}
