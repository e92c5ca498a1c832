//! File discovery and filtering for annolint.

use std::collections::HashSet;
use std::io;
use std::time::Instant;

use ignore::WalkBuilder;
use tracing::info;

use annolint_error::Result;

/// Directories to skip during file discovery.
fn should_skip_dir(name: &str) -> bool {
    matches!(
        name,
        "__pycache__"
            // Virtual environments and installed packages
            | ".venv"
            | "venv"
            | ".tox"
            | ".eggs"
            | "site-packages"
            // Build output directories
            | "build"
            | "dist"
            // Vendor/dependency directories
            | "vendor"
            | "node_modules"
            | "third_party"
    )
}

/// Discover Python files from the explicit file list plus recursive walks of
/// the given directories.
pub fn discover_files(files: &[String], dirs: &[String]) -> Result<Vec<String>> {
    let discovery_start = Instant::now();

    let mut seen = HashSet::new();
    let mut discovered = Vec::new();

    let mut add_path = |path: &str| {
        if seen.contains(path) {
            return;
        }
        seen.insert(path.to_string());
        discovered.push(path.to_string());
    };

    // Add explicit files
    for file in files {
        add_path(file);
    }

    // Walk directories
    if !dirs.is_empty() {
        let walker_threads = std::thread::available_parallelism()
            .map(|v| v.get())
            .unwrap_or(1);

        for dir in dirs {
            let mut builder = WalkBuilder::new(dir);
            builder
                .standard_filters(true)
                .follow_links(false)
                .threads(walker_threads)
                .filter_entry(|entry| {
                    // Always include root
                    if entry.depth() == 0 {
                        return true;
                    }
                    // Non-directories pass through
                    let Some(file_type) = entry.file_type() else {
                        return true;
                    };
                    if !file_type.is_dir() {
                        return true;
                    }
                    // Filter directories by name
                    let Some(name) = entry.file_name().to_str() else {
                        return true;
                    };
                    !should_skip_dir(&name.to_ascii_lowercase())
                });

            for entry in builder.build() {
                let entry = entry.map_err(|e| {
                    io::Error::other(format!("Failed to walk directory {dir}: {e}"))
                })?;

                // Only process files
                if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
                    continue;
                }

                let path = entry.path();
                let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                    continue;
                };

                if ext == "py" {
                    add_path(&path.to_string_lossy());
                }
            }
        }
    }

    // Parallel walks return entries in nondeterministic order; sort so the
    // diagnostic stream stays stable across runs
    discovered.sort();

    info!(
        "File discovery: {:.2}s ({} files)",
        discovery_start.elapsed().as_secs_f64(),
        discovered.len()
    );

    if discovered.is_empty() {
        return Err("No input files found. Check that the directory contains Python files.".into());
    }

    Ok(discovered)
}
