//! Core types shared by configuration and export.

mod density;

pub use density::{join_densities, Density};
