//! File discovery module for finding diagram sources to render.
//!
//! This module handles the discovery of Mermaid files eligible for batch
//! rendering. It only searches the top level of the provided directory for
//! `.mmd` files (extension matched exactly, hidden files skipped), and maps
//! each one to the output file the helper should write.

use crate::config::{DIAGRAM_EXTENSION, OutputFormat};
use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Finds diagram files eligible for rendering in the specified directory.
///
/// Subdirectories and hidden files (`.draft.mmd`) are not searched. The
/// returned list is sorted so that tasks are dispatched in a stable order
/// from one run to the next.
///
/// # Errors
///
/// * `CoreError::InputNotFound` - the directory does not exist or is not a directory
/// * `CoreError::NoFilesFound` - the directory holds no `.mmd` files
/// * `CoreError::Io` - the directory could not be read
///
/// # Examples
///
/// ```rust,no_run
/// use mermaid_render_core::find_diagram_files;
/// use std::path::Path;
///
/// match find_diagram_files(Path::new("./diagrams")) {
///     Ok(files) => println!("Found {} diagram(s)", files.len()),
///     Err(e) => eprintln!("Error: {e}"),
/// }
/// ```
pub fn find_diagram_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(CoreError::InputNotFound(input_dir.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(input_dir)?;
    let mut files: Vec<PathBuf> = read_dir
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();

            if !path.is_file() || entry.file_name().to_string_lossy().starts_with('.') {
                return None;
            }

            // Exact match: `flow.MMD` next to `flow.mmd` would map to the same output.
            path.extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext_str| *ext_str == DIAGRAM_EXTENSION)
                .map(|_| path.clone())
        })
        .collect();

    if files.is_empty() {
        return Err(CoreError::NoFilesFound(input_dir.to_path_buf()));
    }

    files.sort();
    log::debug!("Discovered {} diagram(s) in {}", files.len(), input_dir.display());
    Ok(files)
}

/// Output path for `input`: its stem plus the format's extension, inside `output_dir`.
///
/// `diagrams/flow.mmd` rendered as ASCII into `out/` becomes `out/flow.txt`.
#[must_use]
pub fn output_path_for(input: &Path, output_dir: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{stem}.{}", format.extension()))
}
