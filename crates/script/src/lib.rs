//! Gnuplot script generation for reformatted polar grids
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod builder;
mod config;
mod error;
mod script;

// Inline anything important for a nice public API
#[doc(inline)]
pub use builder::PlotConfigBuilder;

#[doc(inline)]
pub use config::{Orientation, OutputMode, PlotConfig, Projection, Range, ScaleMode};

#[doc(inline)]
pub use script::{build_script, DataFiles, DataSource};

#[doc(inline)]
pub use error::{Error, Result};
