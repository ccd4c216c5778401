//! Android screen density buckets.
//!
//! Each bucket maps to a scale multiplier relative to `mdpi`, where one
//! design pixel equals one density-independent pixel on device.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// A named Android pixel-density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// Every density, from lowest to highest.
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    /// Lowercase name as used by Android resource qualifiers.
    pub fn name(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// Scale multiplier relative to `mdpi`.
    pub fn multiplier(self) -> f64 {
        match self {
            Density::Mdpi => 1.0,
            Density::Hdpi => 1.5,
            Density::Xhdpi => 2.0,
            Density::Xxhdpi => 3.0,
            Density::Xxxhdpi => 4.0,
        }
    }

    /// Export scale needed to go from a design drawn at `self` to `target`.
    pub fn scale_to(self, target: Density) -> f64 {
        target.multiplier() / self.multiplier()
    }

    /// Name of the resource directory holding drawables of this density.
    pub fn drawable_dir(self) -> String {
        format!("drawable-{}", self.name())
    }

    /// Parse a comma-separated density list, e.g. `"mdpi, xhdpi"`.
    pub fn parse_list(s: &str) -> Result<Vec<Density>, String> {
        s.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::parse::<Density>)
            .collect()
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Density {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Density::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown density: '{}' (expected one of {})",
                    s,
                    join_densities(&Density::ALL)
                )
            })
    }
}

/// Join densities with commas, e.g. `mdpi,hdpi`.
pub fn join_densities(densities: &[Density]) -> String {
    densities
        .iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join(",")
}
