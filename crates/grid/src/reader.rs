//! Read operations for raw field outputs
//!
//! Field files are a headerless sequence of `f64` values in native byte order,
//! written row by row. Nothing in the file states its dimensions, so the size
//! on disk is the only check available against the declared grid.

// standard library
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};
use crate::field::{Field, GridShape};

// external crates
use log::{debug, warn};

/// Bytes per sample on disk
const SAMPLE_BYTES: usize = std::mem::size_of::<f64>();

/// Read a field file with the declared `shape`
///
/// By default the file must hold exactly `nrad * nsec` samples. With
/// `allow_truncated` a short file is read up to its last complete sample and
/// anything beyond the declared grid is ignored, both with a warning.
///
/// ```rust, no_run
/// # use hydroplot_grid::{read_field, GridShape};
/// let field = read_field("./out1/gasdens10.dat", GridShape::new(128, 384), false).unwrap();
/// println!("{field}");
/// ```
pub fn read_field<P: AsRef<Path>>(path: P, shape: GridShape, allow_truncated: bool) -> Result<Field> {
    shape.validate()?;
    let values = read_samples(path, shape.number_of_samples(), allow_truncated)?;
    Ok(Field::new(shape, values))
}

/// Read a 1-D radial profile and spread it over `shape.nsec` sectors
///
/// The file holds one value per radial row (`shape.nrad` of them). See
/// [Field::broadcast] for the layout of the result.
pub fn read_profile<P: AsRef<Path>>(path: P, shape: GridShape, allow_truncated: bool) -> Result<Field> {
    shape.validate()?;
    let values = read_samples(path, shape.nrad, allow_truncated)?;
    let mut field = Field::broadcast(&values, shape.nsec);
    field.shape = shape;
    Ok(field)
}

/// Read up to `expected` native-endian samples
fn read_samples<P: AsRef<Path>>(path: P, expected: usize, allow_truncated: bool) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let byte_length = file.metadata()?.len() as usize;

    if byte_length != expected * SAMPLE_BYTES {
        if !allow_truncated {
            return Err(Error::UnexpectedByteLength {
                expected: expected * SAMPLE_BYTES,
                found: byte_length,
            });
        }
        warn!(
            "{} holds {} complete samples but {expected} were declared",
            path.display(),
            byte_length / SAMPLE_BYTES
        );
    }

    let n = expected.min(byte_length / SAMPLE_BYTES);
    debug!("Reading {n} samples from {}", path.display());

    let mut reader = BufReader::new(file);
    let mut buffer = [0u8; SAMPLE_BYTES];
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        reader.read_exact(&mut buffer)?;
        values.push(f64::from_ne_bytes(buffer));
    }

    Ok(values)
}
