// internal modules
use crate::config::{OutputMode, PlotConfig, Projection, Range, ScaleMode};

// external crates
use log::warn;

/// Builder implementation for PlotConfig
///
/// For those not familiar, the builder allows for chained setter calls for a
/// functional approach that could be considered more readable. Any number of
/// parameters can be set this way (including none).
///
/// To get the final [PlotConfig] from the builder, call
/// [build()](PlotConfigBuilder::build). The result is never modified
/// afterwards.
///
/// ```rust
/// # use hydroplot_script::{OutputMode, PlotConfig, Projection, Orientation, Range};
/// let config = PlotConfig::builder()
///     .field("vrad")
///     .projection(Projection::Polar(Orientation::SinCos))
///     .cbrange(Range::new(Some(-0.1), Some(0.1)))
///     .palette(Some("rgbformulae 33,13,10".to_string()))
///     .output(OutputMode::Png("vrad.png".into()))
///     .square(true)
///     .build();
///
/// assert_eq!(config.field, "vrad");
/// assert!(config.projection.is_polar());
/// ```
#[derive(Debug)]
pub struct PlotConfigBuilder {
    field: String,
    scale: ScaleMode,
    projection: Projection,
    curve: bool,
    cbrange: Option<Range>,
    xrange: Option<Range>,
    yrange: Option<Range>,
    palette: Option<String>,
    title: Option<String>,
    xlabel: Option<String>,
    ylabel: Option<String>,
    cblabel: Option<String>,
    output: OutputMode,
    clean: bool,
    square: bool,
    scale_factor: Option<f64>,
}

impl PlotConfigBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [PlotConfig] type
    pub fn build(self) -> PlotConfig {
        PlotConfig {
            field: self.field,
            scale: self.scale,
            projection: self.projection,
            curve: self.curve,
            cbrange: self.cbrange,
            xrange: self.xrange,
            yrange: self.yrange,
            palette: self.palette,
            title: self.title,
            xlabel: self.xlabel,
            ylabel: self.ylabel,
            cblabel: self.cblabel,
            output: self.output,
            clean: self.clean,
            square: self.square,
            scale_factor: self.scale_factor,
        }
    }

    /// Field selector used for default titles and labels
    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = field.into();
        self
    }

    /// Plot log10 of the values
    pub fn log_scale(mut self, log: bool) -> Self {
        self.scale = match log {
            true => ScaleMode::Log,
            false => ScaleMode::Linear,
        };
        self
    }

    /// Rectangular or polar projection of the surface
    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Radial profile line plot instead of a surface
    ///
    /// Overrides the plot command entirely. The palette, colour range and
    /// polar projection only make sense for surfaces and are ignored.
    pub fn curve(mut self, curve: bool) -> Self {
        self.curve = curve;
        self
    }

    /// Colour axis range, surfaces only
    pub fn cbrange<R: Into<Option<Range>>>(mut self, range: R) -> Self {
        self.cbrange = range.into();
        self
    }

    /// X axis range
    pub fn xrange<R: Into<Option<Range>>>(mut self, range: R) -> Self {
        self.xrange = range.into();
        self
    }

    /// Y axis range
    pub fn yrange<R: Into<Option<Range>>>(mut self, range: R) -> Self {
        self.yrange = range.into();
        self
    }

    /// Palette definition, written verbatim after `set palette`
    pub fn palette(mut self, palette: Option<String>) -> Self {
        self.palette = palette;
        self
    }

    /// Plot title, the capitalised field name if not set
    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// X axis label override
    pub fn xlabel(mut self, label: Option<String>) -> Self {
        self.xlabel = label;
        self
    }

    /// Y axis label override
    pub fn ylabel(mut self, label: Option<String>) -> Self {
        self.ylabel = label;
        self
    }

    /// Colour axis label override
    pub fn cblabel(mut self, label: Option<String>) -> Self {
        self.cblabel = label;
        self
    }

    /// Interactive window (default), PNG or EPS export
    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Strip tics, borders, margins and labels for a bare image
    pub fn clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    /// Force a square plot area
    pub fn square(mut self, square: bool) -> Self {
        self.square = square;
        self
    }

    /// Multiply surface values by a constant factor
    ///
    /// Not applied to radial profiles or to the 1-D extension.
    pub fn scale_factor<F: Into<Option<f64>>>(mut self, factor: F) -> Self {
        self.scale_factor = factor.into();
        if self.scale_factor.is_some() && self.curve {
            warn!("Scale factor has no effect on radial profiles");
        }
        self
    }
}

impl Default for PlotConfigBuilder {
    fn default() -> Self {
        Self {
            field: "dens".to_string(),
            scale: ScaleMode::Linear,
            projection: Projection::Rectangular,
            curve: false,
            cbrange: None,
            xrange: None,
            yrange: None,
            palette: None,
            title: None,
            xlabel: None,
            ylabel: None,
            cblabel: None,
            output: OutputMode::Interactive,
            clean: false,
            square: false,
            scale_factor: None,
        }
    }
}
