//! Exported file name normalization.
//!
//! Sketch appends the export scale to every file it writes at a scale other
//! than one (`ic_menu@2x.png`). Android expects the bare artboard name in
//! each `drawable-*` directory, so the suffix is stripped after export.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{DroidResError, Result};

/// `@<digits>[.<digits>]x` at the end of a file stem.
static SCALE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\d+(\.\d+)?x$").expect("scale suffix pattern is valid"));

/// Strip a trailing `@<digits>[.<digits>]x` scale suffix from the stem of
/// `name`, keeping the extension.
///
/// Returns `None` if the name carries no such suffix.
pub fn strip_scale_suffix(name: &str) -> Option<String> {
    let (stem, ext) = match name.rfind('.') {
        Some(dot) if dot > 0 => (&name[..dot], &name[dot..]),
        _ => (name, ""),
    };

    let suffix = SCALE_SUFFIX.find(stem)?;
    Some(format!("{}{}", &stem[..suffix.start()], ext))
}

/// Rename an exported file in `dir` to drop its scale suffix.
///
/// `relative` is the path reported by the exporter, relative to `dir`.
/// Returns the normalized relative path. Files without a suffix are left
/// untouched.
pub fn normalize_exported(dir: &Path, relative: &str) -> Result<String> {
    let relative_path = Path::new(relative);
    let Some(file_name) = relative_path.file_name().and_then(|n| n.to_str()) else {
        return Ok(relative.to_string());
    };
    let Some(stripped) = strip_scale_suffix(file_name) else {
        return Ok(relative.to_string());
    };

    let renamed: PathBuf = relative_path.with_file_name(&stripped);
    let from = dir.join(relative_path);
    let to = dir.join(&renamed);

    debug!(from = %from.display(), to = %to.display(), "renaming exported file");
    fs::rename(&from, &to).map_err(|e| DroidResError::Io {
        path: from.clone(),
        message: format!("Failed to rename to {}: {}", to.display(), e),
    })?;

    Ok(renamed.to_string_lossy().into_owned())
}
