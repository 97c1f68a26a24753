//! Radial coordinates for each row of the grid

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};

// external crates
use log::debug;
use nom::number::complete::double;

/// Source of the radius for every radial row
#[derive(Debug, Clone, PartialEq)]
pub enum RadialAxis {
    /// Explicit radius for each row, typically read from `used_rad.dat`
    Table(Vec<f64>),
    /// Radii spaced evenly from `rmin`
    ///
    /// The spacing is `(rmax - rmin) / nrad`, or exactly `1.0` when the bounds
    /// are equal so that unknown bounds fall back to the row index.
    Linear {
        /// Radius of the first row
        rmin: f64,
        /// Outer bound used for the spacing
        rmax: f64,
    },
}

impl Default for RadialAxis {
    fn default() -> Self {
        Self::linear(0.0, 0.0)
    }
}

impl RadialAxis {
    /// Linear radial axis between two bounds
    pub fn linear(rmin: f64, rmax: f64) -> Self {
        Self::Linear { rmin, rmax }
    }

    /// Radius for row `j` of a grid with `nrad` rows
    ///
    /// ```rust
    /// # use hydroplot_grid::RadialAxis;
    /// // equal bounds step by one
    /// let axis = RadialAxis::linear(2.0, 2.0);
    /// assert_eq!(axis.radius(3, 10), 5.0);
    ///
    /// // otherwise (rmax - rmin) / nrad
    /// let axis = RadialAxis::linear(0.0, 2.0);
    /// assert_eq!(axis.radius(1, 2), 1.0);
    ///
    /// // tables ignore the bounds entirely
    /// let axis = RadialAxis::Table(vec![0.4, 0.45, 0.5]);
    /// assert_eq!(axis.radius(2, 3), 0.5);
    /// ```
    ///
    /// Tables are indexed directly, so call [validate()](RadialAxis::validate)
    /// first for tables of unknown length.
    pub fn radius(&self, j: usize, nrad: usize) -> f64 {
        match self {
            Self::Table(radii) => radii[j],
            Self::Linear { rmin, rmax } => rmin + j as f64 * linear_spacing(*rmin, *rmax, nrad),
        }
    }

    /// Check that a table covers all `nrad` rows
    pub fn validate(&self, nrad: usize) -> Result<()> {
        match self {
            Self::Table(radii) if radii.len() < nrad => Err(Error::RadiusTableTooShort {
                expected: nrad,
                found: radii.len(),
            }),
            _ => Ok(()),
        }
    }
}

/// Radial cell width for a linear axis
fn linear_spacing(rmin: f64, rmax: f64, nrad: usize) -> f64 {
    if rmin == rmax {
        1.0
    } else {
        (rmax - rmin) / nrad as f64
    }
}

/// Read a radius table with one radius per line
///
/// Blank lines are skipped and anything after the first number on a line is
/// ignored. Hydrodynamics codes commonly write the `nrad + 1` cell edges, of
/// which the first `nrad` are used.
///
/// ```rust, no_run
/// # use hydroplot_grid::{read_radius_table, RadialAxis};
/// let radii = read_radius_table("./out1/used_rad.dat").unwrap();
/// let axis = RadialAxis::Table(radii);
/// ```
pub fn read_radius_table<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let mut radii = Vec::new();
    for (idx, text) in content.lines().enumerate() {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            continue;
        }

        match double::<&str, nom::error::Error<&str>>(trimmed) {
            Ok((rest, r)) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                radii.push(r)
            }
            _ => {
                return Err(Error::MalformedRadius {
                    line: idx + 1,
                    text: text.to_string(),
                })
            }
        }
    }

    debug!("Read {} radii from {}", radii.len(), path.display());
    Ok(radii)
}
