//! [`DesignTool`] backed by the `sketchtool` command line.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::debug;

use super::listing::{parse_artboard_names, parse_exported_files};
use super::DesignTool;
use crate::error::{DroidResError, Result};

/// Executable looked up on `PATH` when no tool path is configured.
pub const DEFAULT_SKETCHTOOL: &str = "sketchtool";

/// Runs the `sketchtool` executable as a blocking subprocess.
#[derive(Debug, Clone)]
pub struct SketchTool {
    program: PathBuf,
}

impl SketchTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }

    fn describe(&self, verb: &str) -> String {
        format!("{} {}", self.program.display(), verb)
    }

    /// Run to completion and return stdout, failing on a non-zero exit.
    fn run(&self, verb: &str, mut cmd: Command) -> Result<String> {
        debug!(command = ?cmd, "running design tool");
        let output: Output = cmd.output().map_err(|e| DroidResError::ToolUnavailable {
            tool: self.program.display().to_string(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DroidResError::Tool {
                command: self.describe(verb),
                message: format!("{} ({})", stderr.trim(), output.status),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for SketchTool {
    fn default() -> Self {
        Self::new(DEFAULT_SKETCHTOOL)
    }
}

impl DesignTool for SketchTool {
    fn check_available(&self) -> Result<()> {
        let status = self
            .command(&["--version"])
            .output()
            .map_err(|e| DroidResError::ToolUnavailable {
                tool: self.program.display().to_string(),
                message: e.to_string(),
            })?
            .status;

        if !status.success() {
            return Err(DroidResError::ToolUnavailable {
                tool: self.program.display().to_string(),
                message: format!("--version exited with {}", status),
            });
        }
        Ok(())
    }

    fn list_artboards(&self, file: &Path) -> Result<Vec<String>> {
        let mut cmd = self.command(&["list", "artboards"]);
        cmd.arg(file);
        let stdout = self.run("list artboards", cmd)?;
        parse_artboard_names(&stdout)
    }

    fn export_artboards(&self, file: &Path, scale: f64, output: &Path) -> Result<Vec<String>> {
        let mut output_arg = OsString::from("--output=");
        output_arg.push(output);

        let mut cmd = self.command(&["export", "artboards"]);
        cmd.arg(file)
            .arg("--overwriting")
            .arg("--formats=png")
            .arg(format!("--scales={}", format_scale(scale)))
            .arg(output_arg);
        let stdout = self.run("export artboards", cmd)?;
        Ok(parse_exported_files(&stdout))
    }
}

/// Render a scale factor the way `--scales` expects it, e.g. `1.500000x`.
pub fn format_scale(scale: f64) -> String {
    format!("{:.6}x", scale)
}
