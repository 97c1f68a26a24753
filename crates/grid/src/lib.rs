//! Reformatting of polar grid outputs for plotting
//!
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod field;
mod radius;
mod reader;
mod record;
mod writer;

pub mod reformat;

// Inline anything important for a nice public API
#[doc(inline)]
pub use field::{Field, GridShape};

#[doc(inline)]
pub use radius::{read_radius_table, RadialAxis};

#[doc(inline)]
pub use reader::{read_field, read_profile};

#[doc(inline)]
pub use record::{ProfileRecord, Record, Reformatted};

#[doc(inline)]
pub use reformat::{angular_spacing, Reformatter, ReformatterBuilder};

#[doc(inline)]
pub use writer::write_records;

#[doc(inline)]
pub use error::{Error, Result};
