//! Parsing of sketchtool's textual output.

use serde::Deserialize;

use crate::error::{DroidResError, Result};

/// Prefix of each line `sketchtool export` prints per written file.
const EXPORTED_PREFIX: &str = "Exported ";

/// `sketchtool list artboards` output. Only the fields we use are modelled.
#[derive(Debug, Deserialize)]
struct ArtboardListing {
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    artboards: Vec<Artboard>,
}

#[derive(Debug, Deserialize)]
struct Artboard {
    name: String,
}

/// Flatten the artboard names of every page, in page order.
pub fn parse_artboard_names(json: &str) -> Result<Vec<String>> {
    let listing: ArtboardListing = serde_json::from_str(json).map_err(|e| DroidResError::Tool {
        command: "sketchtool list artboards".to_string(),
        message: format!("Invalid artboard listing: {}", e),
    })?;

    Ok(listing
        .pages
        .into_iter()
        .flat_map(|page| page.artboards)
        .map(|artboard| artboard.name)
        .collect())
}

/// Collect the paths from `Exported <path>` lines.
pub fn parse_exported_files(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| line.strip_prefix(EXPORTED_PREFIX))
        .map(|path| path.trim_end().to_string())
        .filter(|path| !path.is_empty())
        .collect()
}
