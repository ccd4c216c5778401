//! Top-level run: resolve configuration, check the tool, export.

use std::env;

use tracing::{debug, info};

use crate::config::{self, find_config_file, Config, Settings};
use crate::error::{DroidResError, Result};
use crate::export::Exporter;
use crate::output::{display_path, plural, Printer};
use crate::tool::{DesignTool, SketchTool};
use crate::types::join_densities;

use super::Invocation;

pub fn run(invocation: Invocation, printer: &Printer) -> Result<()> {
    let Invocation { cli, debug } = invocation;
    let cwd = env::current_dir().map_err(|e| DroidResError::Io {
        path: ".".into(),
        message: format!("Failed to read working directory: {}", e),
    })?;

    let mut settings = Settings::defaults();
    if let Some(path) = find_config_file(cli.config.as_deref(), &cwd)? {
        debug!(path = %path.display(), "reading config file");
        settings = settings.overlay(config::load(&path)?);
    }

    if debug.print_config {
        println!("{}", settings);
        return Ok(());
    }

    let settings = settings.overlay(cli.overrides());

    if debug.print_args {
        println!("{}", settings);
        return Ok(());
    }

    let tool = SketchTool::new(settings.sketchtool_program());
    tool.check_available()?;

    let config = Config::resolve(settings, &cwd)?;
    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        input_density = %config.input_density,
        output_densities = %join_densities(&config.output_densities),
        "resolved configuration"
    );

    printer.info("Input", config.input_density.name());
    printer.info("Output", &join_densities(&config.output_densities));

    let report = Exporter::new(&tool, printer).run(&config)?;

    printer.status(
        "Finished",
        &format!(
            "{} from {} to {}",
            plural(report.total_exported(), "drawable", "drawables"),
            plural(report.files.len(), "file", "files"),
            display_path(&config.output)
        ),
    );

    Ok(())
}
