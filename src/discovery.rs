//! Input discovery.
//!
//! An input path is either a single design file or a directory whose
//! immediate children are scanned for design files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{DroidResError, Result};

/// Extension of Sketch design files.
pub const DESIGN_EXTENSION: &str = "sketch";

/// Check if `path` is an existing file with the `.sketch` extension.
pub fn is_design_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(DESIGN_EXTENSION)
}

/// Files to export for the given input.
///
/// A file input is returned as-is; whether it is a design file is checked
/// at export time. For a directory, only its immediate `.sketch` children
/// are returned, sorted by file name.
pub fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        return Err(DroidResError::input(format!(
            "{} doesn't exist",
            input.display()
        )));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| DroidResError::Io {
            path: input.to_path_buf(),
            message: format!("Failed to read directory: {}", e),
        })?;
        if is_design_file(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
