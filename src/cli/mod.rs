pub mod run;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Args, CommandFactory, FromArgMatches, Parser};

use crate::config::Settings;
use crate::types::Density;

pub use run::run;

/// droidres - Generate Android resources from .sketch files
#[derive(Parser, Debug)]
#[command(name = "droidres")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory or file containing .sketch files
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// "res" directory of the Android app
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sketch files resolution, i.e. mdpi: 1 Sketch pixel = 1dp on device
    #[arg(short = 's', long = "reference-res", value_enum)]
    pub input_density: Option<Density>,

    /// Resolutions to generate (repeatable)
    #[arg(short = 'r', long = "resolutions", value_enum)]
    pub output_densities: Vec<Density>,

    /// Path to the config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// sketchtool executable to run
    #[arg(long, env = "DROIDRES_SKETCHTOOL")]
    pub sketchtool: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Settings given on the command line; unset flags stay `None`.
    pub fn overrides(&self) -> Settings {
        Settings {
            input: self.input.clone(),
            output: self.output.clone(),
            input_density: self.input_density,
            output_densities: (!self.output_densities.is_empty())
                .then(|| self.output_densities.clone()),
            sketchtool: self.sketchtool.clone(),
        }
    }
}

/// Flags for inspecting configuration precedence. Only registered when the
/// parser is built with debugging enabled.
#[derive(Args, Debug, Default)]
pub struct DebugArgs {
    /// (debug) Print the settings read from the config file and exit
    #[arg(long)]
    pub print_config: bool,

    /// (debug) Print the settings after applying flags and exit
    #[arg(long)]
    pub print_args: bool,
}

/// Parsed command line.
#[derive(Debug)]
pub struct Invocation {
    pub cli: Cli,
    pub debug: DebugArgs,
}

/// Build the argument parser, with the debug flags when `debug` is set.
pub fn command(debug: bool) -> clap::Command {
    let command = Cli::command();
    if debug {
        DebugArgs::augment_args(command)
    } else {
        command
    }
}

/// Parse `args` (including the binary name).
pub fn try_parse_from<I, T>(debug: bool, args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command(debug).try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    let debug = if debug {
        DebugArgs::from_arg_matches(&matches)?
    } else {
        DebugArgs::default()
    };
    Ok(Invocation { cli, debug })
}

/// Parse the process arguments, exiting on `--help`, `--version` or a usage
/// error.
pub fn parse(debug: bool) -> Invocation {
    try_parse_from(debug, std::env::args_os()).unwrap_or_else(|e| e.exit())
}
