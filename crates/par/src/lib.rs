//! Module for reading `.par` run configuration files
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod par;
mod parsers;
mod reader;

// Inline anything important for a nice public API
#[doc(inline)]
pub use par::{Key, ParFile};

#[doc(inline)]
pub use reader::{parse_par, read_par_file};

#[doc(inline)]
pub use error::{Error, Result};
