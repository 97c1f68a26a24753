//! Conversion of polar fields into plottable records
//!
//! # Angular convention
//!
//! Sector `k` of a row sits at angle `k * dx` with
//!
//! ```text
//! dx = 2π / (nsec - 1)
//! ```
//!
//! so the sectors span the closed interval `[0, 2π]`. After the last sector of
//! each row one more record is written at `nsec * dx`, repeating the first
//! sample of the row, which closes the gap that would otherwise appear where
//! the surface wraps round. Existing plots depend on these exact angles, so
//! they must not be "corrected" to `2π / nsec`.
//!
//! # Curve mode
//!
//! Instead of a surface, each row is reduced to the mean of its `nsec`
//! samples, giving a radial profile with one `(radius, average)` per row.

mod builder;

// standard library
use std::f64::consts::PI;
use std::path::Path;

// hydroplot modules
use hydroplot_utils::ValueExt;

// crate modules
use crate::error::Result;
use crate::field::{Field, GridShape};
use crate::radius::RadialAxis;
use crate::reader::{read_field, read_profile};
use crate::record::{ProfileRecord, Record, Reformatted};

// external crates
use log::{debug, info, warn};

#[doc(inline)]
pub use builder::ReformatterBuilder;

/// Angular spacing between sectors for a grid of `nsec` sectors
///
/// ```rust
/// # use hydroplot_grid::angular_spacing;
/// # use std::f64::consts::PI;
/// assert_eq!(angular_spacing(3), PI);
/// assert_eq!(angular_spacing(5), PI / 2.0);
/// ```
pub fn angular_spacing(nsec: usize) -> f64 {
    2.0 * PI / (nsec as f64 - 1.0)
}

/// Convert polar fields into surface or profile records
///
/// The fields remain public for direct use, but a builder is also provided.
///
/// ```rust
/// # use hydroplot_grid::{Field, GridShape, RadialAxis, Reformatted, Reformatter};
/// let field = Field::new(GridShape::new(2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let axis = RadialAxis::linear(0.0, 2.0);
///
/// // radial profile of row averages
/// let reformatter = Reformatter::builder().curve(true).build();
/// let Reformatted::Profile(profile) = reformatter.convert(&field, &axis).unwrap() else {
///     panic!("expected a profile");
/// };
///
/// assert_eq!(profile.len(), 2);
/// assert_eq!(profile[1].radius, 1.0);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Reformatter {
    /// Write log10 of every surface value
    pub log_scale: bool,
    /// Reduce each row to its azimuthal average
    pub curve: bool,
    /// Accept field files shorter or longer than the declared grid
    pub allow_truncated: bool,
}

// Public API
impl Reformatter {
    /// Start with the default configuration
    pub fn new() -> Reformatter {
        Default::default()
    }

    /// Get an instance of the [ReformatterBuilder]
    pub fn builder() -> ReformatterBuilder {
        ReformatterBuilder::default()
    }

    /// Convert a [Field] using radii from `axis`
    pub fn convert(&self, field: &Field, axis: &RadialAxis) -> Result<Reformatted> {
        field.shape.validate()?;
        axis.validate(field.shape.nrad.min(field.rows().len()))?;

        if !field.is_complete() {
            warn!(
                "Field is incomplete ({} of {} samples), the final row is partial",
                field.values.len(),
                field.shape.number_of_samples()
            );
        }

        if self.curve {
            Ok(Reformatted::Profile(self.profile(field, axis)))
        } else {
            Ok(Reformatted::Surface(self.surface(field, axis)))
        }
    }

    /// Reformat the field file at `input` and write the records to `output`
    ///
    /// Returns the number of records written.
    pub fn reformat_file<P, Q>(&self, input: P, shape: GridShape, axis: &RadialAxis, output: Q) -> Result<usize>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        shape.validate()?;
        axis.validate(shape.nrad)?;

        let field = read_field(input.as_ref(), shape, self.allow_truncated)?;
        self.write(&field, axis, output.as_ref())
    }

    /// Reformat a 1-D radial profile file as though it were a full field
    ///
    /// The profile holds `shape.nrad` values, each spread over the `shape.nsec`
    /// sectors of its row, so the output has the same layout as
    /// [reformat_file()](Reformatter::reformat_file).
    pub fn reformat_profile_file<P, Q>(&self, input: P, shape: GridShape, axis: &RadialAxis, output: Q) -> Result<usize>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        shape.validate()?;
        axis.validate(shape.nrad)?;

        let field = read_profile(input.as_ref(), shape, self.allow_truncated)?;
        self.write(&field, axis, output.as_ref())
    }
}

impl Reformatter {
    fn write(&self, field: &Field, axis: &RadialAxis, output: &Path) -> Result<usize> {
        if let Some((min, max)) = field.value_range() {
            debug!("Field values range from {} to {}", min.sci(4, 2), max.sci(4, 2));
        }

        let reformatted = self.convert(field, axis)?;
        reformatted.write(output)?;

        info!("Wrote {} records to {}", reformatted.len(), output.display());
        Ok(reformatted.len())
    }

    /// Records for every sector plus the closing record of each row
    fn surface(&self, field: &Field, axis: &RadialAxis) -> Vec<Record> {
        let GridShape { nrad, nsec } = field.shape;
        let dx = angular_spacing(nsec);

        if self.log_scale && field.values.iter().any(|v| *v <= 0.0) {
            warn!("Field has non-positive values, their log10 is undefined");
        }

        // sized from what was read, the declared grid may be far larger
        let rows = field.rows();
        let mut records = Vec::with_capacity(field.values.len() + rows.len());
        for (j, row) in rows.into_iter().enumerate() {
            let radius = axis.radius(j, nrad);

            for (k, value) in row.iter().enumerate() {
                records.push(Record {
                    angle: k as f64 * dx,
                    radius,
                    value: self.transform(*value),
                });
            }

            // close the circle, partial rows have nothing to close
            if row.len() == nsec {
                records.push(Record {
                    angle: nsec as f64 * dx,
                    radius,
                    value: self.transform(row[0]),
                });
            }
        }

        records
    }

    /// Azimuthal average of every complete row
    fn profile(&self, field: &Field, axis: &RadialAxis) -> Vec<ProfileRecord> {
        let GridShape { nrad, nsec } = field.shape;

        field
            .rows()
            .into_iter()
            .take_while(|row| row.len() == nsec)
            .enumerate()
            .map(|(j, row)| ProfileRecord {
                radius: axis.radius(j, nrad),
                average: row.iter().fold(0.0, |sum, v| sum + v / nsec as f64),
            })
            .collect()
    }

    fn transform(&self, value: f64) -> f64 {
        if self.log_scale {
            value.log10()
        } else {
            value
        }
    }
}
