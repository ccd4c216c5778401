//! Export orchestration.
//!
//! For every input file, asks the design tool for its artboards, then exports
//! them once per target density into `<res>/drawable-<density>/` and strips
//! the scale suffix the tool appends to each file name.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::discovery::{collect_inputs, is_design_file};
use crate::error::{DroidResError, Result};
use crate::normalize::normalize_exported;
use crate::output::{display_path, plural, Printer};
use crate::tool::DesignTool;
use crate::types::Density;

/// Files written for one density of one design file.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityExport {
    pub density: Density,
    /// Scale passed to the design tool.
    pub scale: f64,
    /// Drawable directory the files were written to.
    pub directory: PathBuf,
    /// Normalized file names, relative to `directory`.
    pub files: Vec<String>,
}

/// Result of exporting one design file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileExport {
    pub file: PathBuf,
    pub artboards: Vec<String>,
    /// Empty when the file has no artboards.
    pub densities: Vec<DensityExport>,
}

/// Result of a whole run.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub files: Vec<FileExport>,
}

impl ExportReport {
    /// Total number of files written across all densities.
    pub fn total_exported(&self) -> usize {
        self.files
            .iter()
            .flat_map(|f| &f.densities)
            .map(|d| d.files.len())
            .sum()
    }
}

/// Drives a [`DesignTool`] over the inputs of a [`Config`].
pub struct Exporter<'a, T: DesignTool> {
    tool: &'a T,
    printer: &'a Printer,
}

impl<'a, T: DesignTool> Exporter<'a, T> {
    pub fn new(tool: &'a T, printer: &'a Printer) -> Self {
        Self { tool, printer }
    }

    /// Export every input file. The first error aborts the run.
    pub fn run(&self, config: &Config) -> Result<ExportReport> {
        let inputs = collect_inputs(&config.input)?;
        info!(
            input = %config.input.display(),
            files = inputs.len(),
            "collected design files"
        );

        if inputs.is_empty() {
            self.printer.warning(
                "Skipping",
                &format!("no .sketch files in {}", display_path(&config.input)),
            );
        }

        let mut report = ExportReport::default();
        for file in &inputs {
            report.files.push(self.export_file(file, config)?);
        }

        Ok(report)
    }

    /// Export all artboards of one design file at every target density.
    pub fn export_file(&self, file: &Path, config: &Config) -> Result<FileExport> {
        if !is_design_file(file) {
            return Err(DroidResError::Input {
                message: format!("The input file is not a .sketch file: {}", file.display()),
                help: Some("Pass a .sketch file or a directory containing them".to_string()),
            });
        }

        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let artboards = self.tool.list_artboards(file)?;
        if artboards.is_empty() {
            self.printer.warning("Skipping", &format!("{} (no artboards)", name));
            return Ok(FileExport {
                file: file.to_path_buf(),
                artboards,
                densities: Vec::new(),
            });
        }

        self.printer.status(
            "Exporting",
            &format!("{} ({})", name, plural(artboards.len(), "artboard", "artboards")),
        );

        let mut densities = Vec::with_capacity(config.output_densities.len());
        for &density in &config.output_densities {
            let export = self.export_density(file, &artboards, density, config)?;
            self.printer.info(
                density.name(),
                &self.printer.dim(&export.files.join(", ")),
            );
            densities.push(export);
        }

        Ok(FileExport {
            file: file.to_path_buf(),
            artboards,
            densities,
        })
    }

    fn export_density(
        &self,
        file: &Path,
        artboards: &[String],
        density: Density,
        config: &Config,
    ) -> Result<DensityExport> {
        let scale = config.input_density.scale_to(density);
        let directory = config.output.join(density.drawable_dir());

        fs::create_dir_all(&directory).map_err(|e| DroidResError::Io {
            path: directory.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;

        debug!(file = %file.display(), %density, scale, "exporting artboards");
        let exported = self.tool.export_artboards(file, scale, &directory)?;

        let files = exported
            .iter()
            .map(|relative| normalize_exported(&directory, relative))
            .collect::<Result<Vec<_>>>()?;

        if files.len() != artboards.len() {
            return Err(DroidResError::ExportMismatch {
                file: file.to_path_buf(),
                artboards: artboards.to_vec(),
                exported: files,
            });
        }

        Ok(DensityExport {
            density,
            scale,
            directory,
            files,
        })
    }
}
