//! Config file reader.
//!
//! The config file is an INI document. Only the `[Config]` section is read,
//! with keys from a `[DEFAULT]` section filling the gaps:
//!
//! ```ini
//! [Config]
//! input = design            ; folder of .sketch files
//! output = app/src/main/res
//! inputResolution = mdpi
//! outputResolutions = mdpi,hdpi,xhdpi
//! ```
//!
//! Key names are matched without regard to case.

use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption, Properties};

use crate::error::{DroidResError, Result};
use crate::types::Density;

use super::Settings;

/// Section holding the settings.
pub const CONFIG_SECTION: &str = "Config";

/// Section whose keys apply to every other section.
pub const DEFAULT_SECTION: &str = "DEFAULT";

const KEY_INPUT: &str = "input";
const KEY_OUTPUT: &str = "output";
const KEY_INPUT_RESOLUTION: &str = "inputResolution";
const KEY_OUTPUT_RESOLUTIONS: &str = "outputResolutions";
const KEY_SKETCHTOOL: &str = "sketchtool";

/// Load settings from the config file at `path`.
///
/// Relative paths in the file resolve against the file's own directory.
pub fn load(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(|e| DroidResError::ConfigFile {
        path: path.to_path_buf(),
        message: format!("Failed to read: {}", e),
        help: None,
    })?;
    let base = path.parent().unwrap_or(Path::new(""));

    parse(&content, base).map_err(|message| DroidResError::ConfigFile {
        path: path.to_path_buf(),
        message,
        help: Some(format!(
            "Expected a [{}] section with {}, {}, {} and {} keys",
            CONFIG_SECTION, KEY_INPUT, KEY_OUTPUT, KEY_INPUT_RESOLUTION, KEY_OUTPUT_RESOLUTIONS
        )),
    })
}

/// Parse config file content, resolving relative paths against `base`.
pub fn parse(content: &str, base: &Path) -> std::result::Result<Settings, String> {
    // Quotes and backslashes are kept as written, so Windows-style paths survive.
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(content, options).map_err(|e| e.to_string())?;

    if let Some((key, _)) = ini.section(None::<&str>).and_then(|s| s.iter().next()) {
        return Err(format!("key '{}' outside of any section", key));
    }

    let config: Vec<&Properties> = ini.section_all(Some(CONFIG_SECTION)).collect();
    if config.is_empty() {
        return Ok(Settings::default());
    }
    let layers: Vec<&Properties> = ini
        .section_all(Some(DEFAULT_SECTION))
        .chain(config)
        .collect();
    let get = |key: &str| lookup(&layers, key);

    let input_density = get(KEY_INPUT_RESOLUTION)
        .map(str::parse::<Density>)
        .transpose()?;
    let output_densities = get(KEY_OUTPUT_RESOLUTIONS)
        .map(Density::parse_list)
        .transpose()?;

    Ok(Settings {
        input: get(KEY_INPUT).map(|v| resolve_path(base, v)),
        output: get(KEY_OUTPUT).map(|v| resolve_path(base, v)),
        input_density,
        output_densities,
        sketchtool: get(KEY_SKETCHTOOL).map(|v| resolve_program(base, v)),
    })
}

/// Last value of `key` across `layers`, later layers winning. Blank values
/// count as unset.
fn lookup<'a>(layers: &[&'a Properties], key: &str) -> Option<&'a str> {
    layers
        .iter()
        .copied()
        .flat_map(Properties::iter)
        .filter(|(name, _)| name.eq_ignore_ascii_case(key))
        .last()
        .map(|(_, value)| strip_inline_comment(value))
        .filter(|value| !value.is_empty())
}

/// Drop a trailing `; comment`. The `;` must follow whitespace, so values
/// like `a;b` are kept whole.
fn strip_inline_comment(value: &str) -> &str {
    let end = value
        .char_indices()
        .find(|&(i, c)| c == ';' && value[..i].ends_with(char::is_whitespace))
        .map_or(value.len(), |(i, _)| i);
    value[..end].trim()
}

fn resolve_path(base: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Bare program names stay as-is so they are looked up on `PATH`.
fn resolve_program(base: &Path, value: &str) -> PathBuf {
    if value.contains('/') || value.contains(std::path::MAIN_SEPARATOR) {
        resolve_path(base, value)
    } else {
        PathBuf::from(value)
    }
}
