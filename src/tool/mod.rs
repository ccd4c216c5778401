//! External design tool interface.
//!
//! All rendering is delegated to an external CLI. The [`DesignTool`] trait is
//! the seam between the export pipeline and that process, so the pipeline can
//! run against [`SketchTool`] in production and a fake in tests.

mod listing;
mod sketchtool;

use std::path::Path;

use crate::error::Result;

pub use listing::{parse_artboard_names, parse_exported_files};
pub use sketchtool::{format_scale, SketchTool, DEFAULT_SKETCHTOOL};

/// Operations the export pipeline needs from a design tool.
pub trait DesignTool {
    /// Fail with [`DroidResError::ToolUnavailable`](crate::DroidResError::ToolUnavailable)
    /// if the tool cannot be run.
    fn check_available(&self) -> Result<()>;

    /// Names of every artboard in `file`, in page order.
    fn list_artboards(&self, file: &Path) -> Result<Vec<String>>;

    /// Export every artboard of `file` as PNG at `scale` into `output`.
    ///
    /// Returns the exported paths as reported by the tool, relative to
    /// `output`.
    fn export_artboards(&self, file: &Path, scale: f64, output: &Path) -> Result<Vec<String>>;
}
