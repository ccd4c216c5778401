//! Configuration resolution.
//!
//! Settings come from three layers, each overriding the one before it:
//! built-in defaults, the config file, and command-line flags. A
//! [`Settings`] value is one such layer with every field optional; a
//! [`Config`] is the validated result with nothing missing.
//!
//! # Example
//!
//! ```ignore
//! use droidres::config::{find_config_file, Config, Settings};
//!
//! let mut settings = Settings::defaults();
//! if let Some(path) = find_config_file(None, &cwd)? {
//!     settings = settings.overlay(droidres::config::load(&path)?);
//! }
//! let config = Config::resolve(settings.overlay(flags), &cwd)?;
//! ```

mod file;

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{DroidResError, Result};
use crate::tool::DEFAULT_SKETCHTOOL;
use crate::types::{join_densities, Density};

pub use file::{load, parse, CONFIG_SECTION};

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILENAME: &str = "droidres.config";

/// Name used by earlier releases, still read when the default is absent.
pub const LEGACY_CONFIG_FILENAME: &str = "sketchToDroidRes.config";

/// Density designs are drawn at unless configured otherwise.
pub const DEFAULT_INPUT_DENSITY: Density = Density::Mdpi;

/// One layer of settings. Unset fields fall through to the layer below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Directory or `.sketch` file to export.
    pub input: Option<PathBuf>,
    /// Android `res` directory.
    pub output: Option<PathBuf>,
    /// Density the designs were drawn at.
    pub input_density: Option<Density>,
    /// Densities to export.
    pub output_densities: Option<Vec<Density>>,
    /// Design tool executable.
    pub sketchtool: Option<PathBuf>,
}

impl Settings {
    /// Built-in defaults: designs at mdpi, every density exported.
    pub fn defaults() -> Self {
        Self {
            input: None,
            output: None,
            input_density: Some(DEFAULT_INPUT_DENSITY),
            output_densities: Some(Density::ALL.to_vec()),
            sketchtool: None,
        }
    }

    /// Apply `top` over `self`; every field set in `top` wins.
    pub fn overlay(self, top: Settings) -> Settings {
        Settings {
            input: top.input.or(self.input),
            output: top.output.or(self.output),
            input_density: top.input_density.or(self.input_density),
            output_densities: top.output_densities.or(self.output_densities),
            sketchtool: top.sketchtool.or(self.sketchtool),
        }
    }

    /// Design tool executable, `sketchtool` on `PATH` when unset.
    pub fn sketchtool_program(&self) -> PathBuf {
        self.sketchtool
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SKETCHTOOL))
    }
}

/// `key=value` lines, as printed by the `--print-*` debug flags.
impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_none<T: fmt::Display>(value: Option<T>) -> String {
            value.map_or_else(|| "None".to_string(), |v| v.to_string())
        }

        writeln!(f, "input={}", or_none(self.input.as_ref().map(|p| p.display())))?;
        writeln!(f, "output={}", or_none(self.output.as_ref().map(|p| p.display())))?;
        writeln!(f, "inputRes={}", or_none(self.input_density))?;
        write!(
            f,
            "outputResolutions={}",
            or_none(self.output_densities.as_deref().map(join_densities))
        )
    }
}

/// Fully resolved configuration for an export run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Absolute path of an existing `.sketch` file or directory.
    pub input: PathBuf,
    /// Absolute path of an existing `res` directory.
    pub output: PathBuf,
    pub input_density: Density,
    pub output_densities: Vec<Density>,
}

impl Config {
    /// Validate merged settings. Relative paths resolve against `cwd`.
    pub fn resolve(settings: Settings, cwd: &Path) -> Result<Config> {
        let input = settings.input.ok_or_else(|| DroidResError::Config {
            message: "No input specified".to_string(),
            help: Some("Pass --input or set 'input' in the config file".to_string()),
        })?;
        let input = absolute(cwd, &input);
        if !input.is_dir() && !input.is_file() {
            return Err(DroidResError::input(format!(
                "{} doesn't exist",
                input.display()
            )));
        }

        let output = settings.output.ok_or_else(|| DroidResError::Config {
            message: "No output specified".to_string(),
            help: Some("Pass --output or set 'output' in the config file".to_string()),
        })?;
        let output = absolute(cwd, &output);
        if !output.is_dir() {
            return Err(DroidResError::config(format!(
                "{} doesn't exist",
                output.display()
            )));
        }

        let output_densities = settings
            .output_densities
            .filter(|densities| !densities.is_empty())
            .ok_or_else(|| DroidResError::config("No output resolutions specified"))?;

        Ok(Config {
            input,
            output,
            input_density: settings.input_density.unwrap_or(DEFAULT_INPUT_DENSITY),
            output_densities,
        })
    }
}

/// Join `path` onto `base`, folding away `.` and `..` components.
fn absolute(base: &Path, path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in base.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}

/// Locate the config file to read, if any.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILENAME`] in
/// `cwd` is used when present, then [`LEGACY_CONFIG_FILENAME`].
pub fn find_config_file(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                return Err(DroidResError::ConfigFile {
                    message: "File doesn't exist".to_string(),
                    help: None,
                    path,
                });
            }
            Ok(Some(path))
        }
        None => Ok([DEFAULT_CONFIG_FILENAME, LEGACY_CONFIG_FILENAME]
            .into_iter()
            .map(|name| cwd.join(name))
            .find(|path| path.is_file())),
    }
}
