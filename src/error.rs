use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Exit status for a config file that cannot be read or parsed.
pub const EXIT_CONFIG_FILE: u8 = 1;

/// Exit status for every other validation or execution failure.
pub const EXIT_FAILURE: u8 = 2;

/// Main error type for droidres operations
#[derive(Error, Diagnostic, Debug)]
pub enum DroidResError {
    #[error("{tool} is not installed or cannot be run: {message}")]
    #[diagnostic(
        code(droidres::tool_unavailable),
        help("Install Sketch and its command line tools: http://bohemiancoding.com/sketch/tool/")
    )]
    ToolUnavailable { tool: String, message: String },

    #[error("Config file {}: {message}", .path.display())]
    #[diagnostic(code(droidres::config_file))]
    ConfigFile {
        path: PathBuf,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(droidres::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Input error: {message}")]
    #[diagnostic(code(droidres::input))]
    Input {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error(
        "Exported files don't match the artboards of {}\nartboards: {artboards:?}\nexported: {exported:?}",
        .file.display()
    )]
    #[diagnostic(code(droidres::export_mismatch))]
    ExportMismatch {
        file: PathBuf,
        artboards: Vec<String>,
        exported: Vec<String>,
    },

    #[error("{command} failed: {message}")]
    #[diagnostic(code(droidres::tool))]
    Tool { command: String, message: String },

    #[error("IO error with {}: {message}", .path.display())]
    #[diagnostic(code(droidres::io))]
    Io { path: PathBuf, message: String },
}

impl DroidResError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DroidResError::ConfigFile { .. } => EXIT_CONFIG_FILE,
            _ => EXIT_FAILURE,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        DroidResError::Config {
            message: message.into(),
            help: None,
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        DroidResError::Input {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DroidResError>;
