// standard library
use std::path::PathBuf;
use std::str::FromStr;

// hydroplot modules
use hydroplot_utils::{f, OptionExt};

// crate modules
use crate::builder::PlotConfigBuilder;
use crate::error::{Error, Result};

// external crates
use nom::character::complete::char;
use nom::combinator::{all_consuming, opt};
use nom::number::complete::double;
use nom::sequence::separated_pair;
use nom::IResult;

/// Linear or base-10 logarithmic values
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    #[default]
    /// Plot the raw values
    Linear,
    /// Plot log10 of the values
    Log,
}

/// Order of the cartesian pair in polar projections
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    /// `(r cos θ, r sin θ)`, angles counter-clockwise from the x axis
    CosSin,
    /// `(r sin θ, r cos θ)`, angles clockwise from the y axis
    SinCos,
}

/// How record coordinates map onto the plot axes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    #[default]
    /// Angle along x and radius along y
    Rectangular,
    /// Cartesian disk view
    Polar(Orientation),
}

impl Projection {
    /// Gnuplot `using` expressions for the two plot coordinates
    ///
    /// ```rust
    /// # use hydroplot_script::{Orientation, Projection};
    /// assert_eq!(Projection::Rectangular.expressions(), ("($1)", "($2)"));
    /// assert_eq!(
    ///     Projection::Polar(Orientation::SinCos).expressions(),
    ///     ("($2*sin($1))", "($2*cos($1))")
    /// );
    /// ```
    pub fn expressions(&self) -> (&'static str, &'static str) {
        match self {
            Self::Rectangular => ("($1)", "($2)"),
            Self::Polar(Orientation::CosSin) => ("($2*cos($1))", "($2*sin($1))"),
            Self::Polar(Orientation::SinCos) => ("($2*sin($1))", "($2*cos($1))"),
        }
    }

    /// True for either polar orientation
    pub fn is_polar(&self) -> bool {
        matches!(self, Self::Polar(_))
    }
}

/// Where gnuplot sends the plot
#[derive(Debug, Default, Clone, PartialEq)]
pub enum OutputMode {
    #[default]
    /// Interactive window
    Interactive,
    /// PNG image at the given path
    Png(PathBuf),
    /// Encapsulated PostScript at the given path
    Eps(PathBuf),
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Interactive => write!(f, "interactive"),
            Self::Png(path) => write!(f, "png ({})", path.display()),
            Self::Eps(path) => write!(f, "eps ({})", path.display()),
        }
    }
}

/// Axis range with optional bounds
///
/// A missing bound is left for gnuplot to autoscale. Parsed from `min:max`
/// with either side optionally empty, and surrounding brackets allowed.
///
/// ```rust
/// # use hydroplot_script::Range;
/// let range: Range = "-1.5:2".parse().unwrap();
/// assert_eq!(range, Range::new(Some(-1.5), Some(2.0)));
/// assert_eq!(range.to_string(), "[-1.5:2]");
///
/// let range: Range = "[1e-4:]".parse().unwrap();
/// assert_eq!(range, Range::new(Some(1e-4), None));
/// assert_eq!(range.to_string(), "[0.0001:]");
///
/// assert!("2".parse::<Range>().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Range {
    /// Lower bound
    pub min: Option<f64>,
    /// Upper bound
    pub max: Option<f64>,
}

impl Range {
    /// New range from optional bounds
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|i| i.strip_suffix(']'))
            .unwrap_or(trimmed);

        let parsed: IResult<&str, (Option<f64>, Option<f64>)> =
            all_consuming(separated_pair(opt(double), char(':'), opt(double)))(inner.trim());

        match parsed {
            Ok((_, (min, max))) => Ok(Self { min, max }),
            Err(_) => Err(Error::InvalidRange(s.to_string())),
        }
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{}:{}]", self.min.display_or_blank(), self.max.display_or_blank())
    }
}

/// Resolved plotting options
///
/// Built once through [PlotConfig::builder()] and only ever read afterwards.
/// Every option has a sensible default, so an empty builder produces an
/// interactive rectangular plot of the `dens` field.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Field selector, e.g. `dens`, `vrad`, `vtheta`
    pub field: String,
    /// Linear or log10 values
    pub scale: ScaleMode,
    /// Rectangular or polar view of the surface
    pub projection: Projection,
    /// Radial profile line plot instead of a surface
    pub curve: bool,
    /// Colour axis range
    pub cbrange: Option<Range>,
    /// X axis range
    pub xrange: Option<Range>,
    /// Y axis range
    pub yrange: Option<Range>,
    /// Palette definition, everything after `set palette`
    pub palette: Option<String>,
    /// Plot title
    pub title: Option<String>,
    /// X axis label override
    pub xlabel: Option<String>,
    /// Y axis label override
    pub ylabel: Option<String>,
    /// Colour axis label override
    pub cblabel: Option<String>,
    /// Interactive window or image export
    pub output: OutputMode,
    /// Strip tics, borders and margins
    pub clean: bool,
    /// Force a square plot
    pub square: bool,
    /// Factor applied to the plotted values
    pub scale_factor: Option<f64>,
}

impl PlotConfig {
    /// Get an instance of the [PlotConfigBuilder]
    pub fn builder() -> PlotConfigBuilder {
        PlotConfigBuilder::default()
    }

    /// True if values are plotted as log10
    pub fn is_log(&self) -> bool {
        self.scale == ScaleMode::Log
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        PlotConfigBuilder::default().build()
    }
}

impl std::fmt::Display for PlotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "PlotConfig {\n".to_string();
        s += &f!("    field: {}\n", self.field);
        s += &f!("    scale: {:?}\n", self.scale);
        s += &f!("    projection: {:?}\n", self.projection);
        s += &f!("    curve: {}\n", self.curve);
        s += &f!("    cbrange: {}\n", self.cbrange.display());
        s += &f!("    xrange: {}\n", self.xrange.display());
        s += &f!("    yrange: {}\n", self.yrange.display());
        s += &f!("    output: {}\n", self.output);
        s += &f!("    scale_factor: {}\n}}", self.scale_factor.display());
        write!(f, "{}", s)
    }
}
