// internal modules
use crate::reformat::Reformatter;

// extrenal crates
use log::warn;

/// Builder implementation for Reformatter configuration
///
/// The fields of [Reformatter] are left public for direct use but the module
/// also implements a builder for chained setter calls. Any number of
/// parameters can be set this way (including none).
///
/// To get the final [Reformatter] from the builder, call
/// [build()](ReformatterBuilder::build).
///
/// ```rust, no_run
/// # use hydroplot_grid::{GridShape, RadialAxis, Reformatter};
/// let reformatter = Reformatter::builder()
///     .log_scale(true)
///     .curve(false)
///     .allow_truncated(false)
///     .build();
///
/// let axis = RadialAxis::linear(0.4, 2.5);
/// reformatter
///     .reformat_file("gasdens3.dat", GridShape::new(128, 384), &axis, "gasdens3.bin")
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct ReformatterBuilder {
    /// Write log10 of every surface value
    log_scale: bool,
    /// Reduce each row to its azimuthal average
    curve: bool,
    /// Accept field files shorter or longer than the declared grid
    allow_truncated: bool,
}

impl ReformatterBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [Reformatter] type
    pub fn build(self) -> Reformatter {
        Reformatter {
            log_scale: self.log_scale,
            curve: self.curve,
            allow_truncated: self.allow_truncated,
        }
    }

    /// Write the base-10 logarithm of surface values
    ///
    /// Only applies to surfaces. Profiles always average the raw values and
    /// leave the log scale to the plot axis.
    pub fn log_scale(mut self, log_scale: bool) -> Self {
        self.log_scale = log_scale;
        self
    }

    /// Reduce every row to a single `(radius, average)` record
    pub fn curve(mut self, curve: bool) -> Self {
        self.curve = curve;
        self
    }

    /// Accept field files that do not match the declared grid
    ///
    /// Off by default, so a file of the wrong size is an error. When enabled,
    /// reading stops at the last complete sample of a short file and extra
    /// samples in a long file are ignored.
    pub fn allow_truncated(mut self, allow: bool) -> Self {
        if allow {
            warn!("Field files will not be checked against the declared grid size");
        }
        self.allow_truncated = allow;
        self
    }
}
