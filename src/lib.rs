//! droidres - Sketch to Android drawable exporter
//!
//! A library for exporting the artboards of `.sketch` files as PNG drawables
//! for every Android screen density, using `sketchtool` for rendering.

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod normalize;
pub mod output;
pub mod tool;
pub mod types;

pub use config::{Config, Settings};
pub use error::{DroidResError, Result};
pub use export::{DensityExport, ExportReport, Exporter, FileExport};
pub use normalize::{normalize_exported, strip_scale_suffix};
pub use tool::{DesignTool, SketchTool};
pub use types::Density;
