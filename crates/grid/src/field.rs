// hydroplot modules
use hydroplot_utils::{f, SliceExt};

// crate modules
use crate::error::{Error, Result};
use crate::record::Record;

/// Radial and azimuthal cell counts of a polar grid
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Number of radial rows
    pub nrad: usize,
    /// Number of azimuthal sectors per row
    pub nsec: usize,
}

impl GridShape {
    /// New grid shape from the radial and azimuthal cell counts
    pub fn new(nrad: usize, nsec: usize) -> Self {
        Self { nrad, nsec }
    }

    /// Total number of samples expected for the grid
    ///
    /// Saturates rather than overflowing for shapes that fail
    /// [validate()](GridShape::validate).
    pub fn number_of_samples(&self) -> usize {
        self.nrad.saturating_mul(self.nsec)
    }

    /// Check the shape can be reformatted
    ///
    /// Angular spacing is `2π / (nsec - 1)`, so a single sector is as invalid
    /// as an empty grid. The byte size of the reformatted surface must also be
    /// representable, which bounds every other size derived from the shape.
    ///
    /// ```rust
    /// # use hydroplot_grid::GridShape;
    /// assert!(GridShape::new(128, 384).validate().is_ok());
    /// assert!(GridShape::new(0, 384).validate().is_err());
    /// assert!(GridShape::new(128, 1).validate().is_err());
    /// assert!(GridShape::new(1 << 40, 1 << 20).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let surface_bytes = self
            .nrad
            .checked_mul(self.nsec.saturating_add(1))
            .and_then(|records| records.checked_mul(Record::BYTES));

        if self.nrad == 0 || self.nsec < 2 || surface_bytes.is_none() {
            return Err(Error::InvalidDimensions {
                nrad: self.nrad,
                nsec: self.nsec,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}x{}", self.nrad, self.nsec)
    }
}

/// Scalar field samples on a polar grid
///
/// Samples are stored flat in row-major order, radial index outer and
/// azimuthal index inner, exactly as they are laid out on disk.
///
/// ```text
/// values = [ f(r0,θ0) f(r0,θ1) ... f(r0,θn) f(r1,θ0) f(r1,θ1) ... ]
/// ```
///
/// A complete field holds `nrad * nsec` values. Fields read leniently from a
/// truncated file may hold fewer, in which case the last row is partial.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Field {
    /// Declared dimensions of the grid
    pub shape: GridShape,
    /// Flat row-major samples
    pub values: Vec<f64>,
}

impl Field {
    /// New field from its declared shape and samples
    pub fn new(shape: GridShape, values: Vec<f64>) -> Self {
        Self { shape, values }
    }

    /// Field built from a radial profile with one value per row
    ///
    /// Every value is repeated across all `nsec` sectors of its row, so a 1-D
    /// profile can be drawn on the same polar surface as a full field.
    ///
    /// ```rust
    /// # use hydroplot_grid::Field;
    /// let field = Field::broadcast(&[1.0, 2.0], 3);
    /// assert_eq!(field.values, vec![1.0, 1.0, 1.0, 2.0, 2.0, 2.0]);
    /// assert_eq!(field.shape.nrad, 2);
    /// ```
    pub fn broadcast(profile: &[f64], nsec: usize) -> Self {
        let values = profile
            .iter()
            .flat_map(|v| std::iter::repeat(*v).take(nsec))
            .collect();

        Self {
            shape: GridShape::new(profile.len(), nsec),
            values,
        }
    }

    /// Samples grouped by radial row
    ///
    /// The final row is shorter than `nsec` when the field is incomplete.
    pub fn rows(&self) -> Vec<&[f64]> {
        self.values.chunks(self.shape.nsec.max(1)).collect()
    }

    /// True if every sample of the declared grid is present
    pub fn is_complete(&self) -> bool {
        self.values.len() == self.shape.number_of_samples()
    }

    /// Minimum and maximum sample value, if all samples are finite
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values.try_min_max().ok()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Field {\n".to_string();
        s += &f!("    shape: {}\n", self.shape);
        s += &f!(
            "    samples: {} of {}\n}}",
            self.values.len(),
            self.shape.number_of_samples()
        );
        write!(f, "{}", s)
    }
}
