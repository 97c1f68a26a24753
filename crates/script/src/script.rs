//! Assembly of the gnuplot script text

// standard library
use std::path::{Path, PathBuf};

// hydroplot modules
use hydroplot_utils::{f, StringExt};

// crate modules
use crate::config::{OutputMode, PlotConfig, Projection, Range};

/// Statements that strip every decoration from the plot
const CLEAN: &str = "\
unset xtics
unset ytics
unset border
unset key
unset colorbox
unset title
unset xlabel
unset ylabel
set lmargin 0
set rmargin 0
set tmargin 0
set bmargin 0
set size ratio -1
";

/// Tics at fractions of π for the angular axis
const PI_TICS: &str = "set xtics (\"0\" 0, \"{/Symbol p}/2\" pi/2, \"{/Symbol p}\" pi, \"3{/Symbol p}/2\" 3*pi/2, \"2{/Symbol p}\" 2*pi)\n";

/// Binary record file written by the grid reformatter
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    /// Path to the binary records
    pub path: PathBuf,
    /// Number of radial rows
    pub nrad: usize,
    /// Number of azimuthal sectors in the original field
    ///
    /// Surfaces hold `nsec + 1` records per row because of the closing record.
    pub nsec: usize,
}

impl DataSource {
    /// New data source for a reformatted `nrad` by `nsec` grid
    pub fn new<P: AsRef<Path>>(path: P, nrad: usize, nsec: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            nrad,
            nsec,
        }
    }
}

/// Every data file referenced by the plot command
#[derive(Debug, Clone, PartialEq)]
pub struct DataFiles {
    /// Reformatted field
    pub primary: DataSource,
    /// Reformatted 1-D extension, if requested
    pub secondary: Option<DataSource>,
}

impl DataFiles {
    /// Data files with only the primary field
    pub fn new(primary: DataSource) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    /// Add the 1-D extension
    pub fn with_secondary(mut self, secondary: DataSource) -> Self {
        self.secondary = Some(secondary);
        self
    }
}

/// Build the full gnuplot script for `config` plotting `data`
///
/// ```rust
/// # use hydroplot_script::{build_script, DataFiles, DataSource, OutputMode, PlotConfig};
/// let config = PlotConfig::builder()
///     .curve(true)
///     .log_scale(true)
///     .output(OutputMode::Png("profile.png".into()))
///     .build();
/// let data = DataFiles::new(DataSource::new("profile.bin", 128, 384));
///
/// let script = build_script(&config, &data);
/// assert!(script.contains("set logscale y"));
/// assert!(script.ends_with(
///     "plot \"profile.bin\" binary record=(128) format=\"%2double\" endian=little using 1:2 with lines title \"dens\"\n"
/// ));
/// ```
pub fn build_script(config: &PlotConfig, data: &DataFiles) -> String {
    let mut s = String::new();

    s += &terminal(&config.output);
    s += &aspect(config);
    s += &title(config);
    s += &labels(config);

    if is_rectangular_surface(config) {
        s += PI_TICS;
    }

    if config.curve && config.is_log() {
        s += "set logscale y\n";
    }

    if !config.curve {
        s += &range("cbrange", config.cbrange);
        if let Some(palette) = &config.palette {
            s += &f!("set palette {palette}\n");
        }
    }

    s += &range("xrange", config.xrange);
    s += &range("yrange", config.yrange);

    if config.clean {
        s += CLEAN;
    }

    match config.curve {
        true => s += &curve_command(config, data),
        false => s += &surface_command(config, data),
    }

    // keep the window open until the user closes it
    if config.output == OutputMode::Interactive {
        s += "pause mouse close\n";
    }

    s
}

fn is_rectangular_surface(config: &PlotConfig) -> bool {
    !config.curve && config.projection == Projection::Rectangular
}

fn terminal(output: &OutputMode) -> String {
    match output {
        OutputMode::Interactive => String::new(),
        OutputMode::Png(path) => f!(
            "set terminal pngcairo enhanced size 1024,768\nset output {}\n",
            path.display().to_string().quoted()
        ),
        OutputMode::Eps(path) => f!(
            "set terminal postscript eps enhanced color\nset output {}\n",
            path.display().to_string().quoted()
        ),
    }
}

fn aspect(config: &PlotConfig) -> String {
    let polar_surface = !config.curve && config.projection.is_polar();
    match polar_surface || config.square {
        true => "set size ratio -1\n".to_string(),
        false => String::new(),
    }
}

fn title(config: &PlotConfig) -> String {
    let title = match &config.title {
        Some(title) => title.clone(),
        None => config.field.capitalise(),
    };
    f!("set title {}\n", title.quoted())
}

fn labels(config: &PlotConfig) -> String {
    let (x_default, y_default) = match (config.curve, config.projection) {
        (true, _) => ("radius".to_string(), config.field.clone()),
        (false, Projection::Rectangular) => ("theta".to_string(), "radius".to_string()),
        (false, Projection::Polar(_)) => ("radius".to_string(), "radius".to_string()),
    };

    let xlabel = config.xlabel.clone().unwrap_or(x_default);
    let ylabel = config.ylabel.clone().unwrap_or(y_default);

    let mut s = f!("set xlabel {}\n", xlabel.quoted());
    s += &f!("set ylabel {}\n", ylabel.quoted());

    if !config.curve {
        let cblabel = match (&config.cblabel, config.is_log()) {
            (Some(label), _) => label.clone(),
            (None, true) => f!("{} (log10)", config.field),
            (None, false) => config.field.clone(),
        };
        s += &f!("set cblabel {}\n", cblabel.quoted());
    }

    s
}

fn range(name: &str, range: Option<Range>) -> String {
    match range {
        Some(range) => f!("set {name} {range}\n"),
        None => String::new(),
    }
}

/// Surface plot of one or two reformatted fields
fn surface_command(config: &PlotConfig, data: &DataFiles) -> String {
    let (x, y) = config.projection.expressions();

    // scaling only applies to a lone primary surface
    let value = match (config.scale_factor, &data.secondary) {
        (Some(factor), None) => f!("($3*{factor})"),
        _ => "($3)".to_string(),
    };

    let mut clauses = vec![surface_clause(&data.primary, x, y, &value)];
    if let Some(secondary) = &data.secondary {
        clauses.push(surface_clause(secondary, x, y, "($3)"));
    }

    f!("set pm3d map\nsplot {}\n", clauses.join(", \\\n      "))
}

fn surface_clause(source: &DataSource, x: &str, y: &str, value: &str) -> String {
    f!(
        "{} binary record=({},{}) format=\"%3double\" endian=little using {x}:{y}:{value} with pm3d notitle",
        source.path.display().to_string().quoted(),
        source.nsec + 1,
        source.nrad,
    )
}

/// Line plot of one or two radial profiles
fn curve_command(config: &PlotConfig, data: &DataFiles) -> String {
    let mut clauses = vec![curve_clause(&data.primary, &config.field)];
    if let Some(secondary) = &data.secondary {
        clauses.push(curve_clause(secondary, &f!("{} (1D)", config.field)));
    }

    f!("plot {}\n", clauses.join(", \\\n     "))
}

fn curve_clause(source: &DataSource, title: &str) -> String {
    f!(
        "{} binary record=({}) format=\"%2double\" endian=little using 1:2 with lines title {}",
        source.path.display().to_string().quoted(),
        source.nrad,
        title.quoted()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Orientation;

    #[test]
    fn rectangular_labels() {
        let config = PlotConfig::default();
        assert_eq!(
            labels(&config),
            "set xlabel \"theta\"\nset ylabel \"radius\"\nset cblabel \"dens\"\n"
        );
    }

    #[test]
    fn polar_labels() {
        let config = PlotConfig::builder()
            .projection(Projection::Polar(Orientation::CosSin))
            .log_scale(true)
            .build();
        assert_eq!(
            labels(&config),
            "set xlabel \"radius\"\nset ylabel \"radius\"\nset cblabel \"dens (log10)\"\n"
        );
    }

    #[test]
    fn curve_labels_ignore_projection() {
        let config = PlotConfig::builder()
            .field("vrad")
            .projection(Projection::Polar(Orientation::SinCos))
            .curve(true)
            .build();
        assert_eq!(labels(&config), "set xlabel \"radius\"\nset ylabel \"vrad\"\n");
    }

    #[test]
    fn overridden_labels() {
        let config = PlotConfig::builder()
            .xlabel(Some("phi".to_string()))
            .cblabel(Some("Σ".to_string()))
            .log_scale(true)
            .build();
        assert_eq!(
            labels(&config),
            "set xlabel \"phi\"\nset ylabel \"radius\"\nset cblabel \"Σ\"\n"
        );
    }

    #[test]
    fn default_title_is_capitalised_field() {
        let config = PlotConfig::builder().field("vtheta").build();
        assert_eq!(title(&config), "set title \"Vtheta\"\n");
    }

    #[test]
    fn terminals() {
        assert_eq!(terminal(&OutputMode::Interactive), "");
        assert_eq!(
            terminal(&OutputMode::Png("out/dens.png".into())),
            "set terminal pngcairo enhanced size 1024,768\nset output \"out/dens.png\"\n"
        );
        assert_eq!(
            terminal(&OutputMode::Eps("dens.eps".into())),
            "set terminal postscript eps enhanced color\nset output \"dens.eps\"\n"
        );
    }

    #[test]
    fn aspect_options() {
        let polar = PlotConfig::builder()
            .projection(Projection::Polar(Orientation::CosSin))
            .build();
        assert_eq!(aspect(&polar), "set size ratio -1\n");

        let square = PlotConfig::builder().curve(true).square(true).build();
        assert_eq!(aspect(&square), "set size ratio -1\n");

        let polar_curve = PlotConfig::builder()
            .projection(Projection::Polar(Orientation::CosSin))
            .curve(true)
            .build();
        assert_eq!(aspect(&polar_curve), "");

        assert_eq!(aspect(&PlotConfig::default()), "");
    }

    #[test]
    fn ranges() {
        assert_eq!(range("xrange", None), "");
        assert_eq!(
            range("cbrange", Some(Range::new(Some(-1.0), None))),
            "set cbrange [-1:]\n"
        );
    }
}
