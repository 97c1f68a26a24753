// standard library
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::writer::write_records;

// external crates
use serde::{Deserialize, Serialize};

/// One sample of a reformatted surface
///
/// Serialised as three little-endian `f64` values, 24 bytes in total, which
/// gnuplot reads with `binary format="%3double"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Azimuthal angle in radians
    pub angle: f64,
    /// Radius of the row
    pub radius: f64,
    /// Sample value, possibly log10 transformed
    pub value: f64,
}

impl Record {
    /// Size of a serialised record in bytes
    pub const BYTES: usize = 3 * std::mem::size_of::<f64>();
}

/// Azimuthal average of one radial row
///
/// Serialised as two little-endian `f64` values, 16 bytes in total, read with
/// `binary format="%2double"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Radius of the row
    pub radius: f64,
    /// Mean of the row samples
    pub average: f64,
}

impl ProfileRecord {
    /// Size of a serialised record in bytes
    pub const BYTES: usize = 2 * std::mem::size_of::<f64>();
}

/// Result of reformatting a field
#[derive(Debug, Clone, PartialEq)]
pub enum Reformatted {
    /// Full surface with a closing record at the end of every row
    Surface(Vec<Record>),
    /// Radial profile, one record per row
    Profile(Vec<ProfileRecord>),
}

impl Reformatted {
    /// Number of records
    pub fn len(&self) -> usize {
        match self {
            Self::Surface(records) => records.len(),
            Self::Profile(records) => records.len(),
        }
    }

    /// True if there are no records at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Write the records to a binary file at `path`
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        match self {
            Self::Surface(records) => write_records(records, path),
            Self::Profile(records) => write_records(records, path),
        }
    }
}
