//! Command line interface

// standard library
use std::path::PathBuf;

// hydroplot modules
use hydroplot::script::Range;

// external crates
use clap::{ArgAction, Parser};

/// Plot polar hydrodynamics outputs through gnuplot
///
/// Field files are raw `nrad x nsec` grids of native-endian doubles, as
/// written by FARGO-style codes. The grid dimensions come from a `.par` run
/// configuration file or the command line, and the most recent output in
/// the output directory is plotted unless a file or output number is given.
///
/// Examples
/// --------
///
///  Typical use
///     $ hydroplot -p in/template.par
///
///  Polar view of output 42 on a log scale
///     $ hydroplot -p in/template.par -n 42 --polar --log
///
///  Radial profile of the radial velocity
///     $ hydroplot -p in/template.par -f vrad --curve
///
///  Export a clean PNG of an explicit file
///     $ hydroplot out/gasdens10.dat --nrad 128 --nsec 384 --clean --png dens.png
#[derive(Parser, Debug)]
#[command(version, about, verbatim_doc_comment)]
#[command(after_help = "Exit codes: 0 success, 255 usage error, 1 data, renderer or interrupt")]
pub struct Cli {
    /// Explicit field file to plot
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Run configuration (.par) supplying grid dimensions and output directory
    #[arg(short, long, value_name = "PATH")]
    pub par: Option<PathBuf>,

    /// Output directory, overrides OutputDir from the .par file
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Field to plot, e.g. dens, vrad, vtheta
    #[arg(short, long, value_name = "NAME", default_value = "dens")]
    pub field: String,

    /// Output number (default: most recent)
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Number of radial cells
    #[arg(long, value_name = "N")]
    pub nrad: Option<usize>,

    /// Number of azimuthal cells
    #[arg(long, value_name = "N")]
    pub nsec: Option<usize>,

    /// Inner radius
    #[arg(long, value_name = "R", allow_negative_numbers = true)]
    pub rmin: Option<f64>,

    /// Outer radius
    #[arg(long, value_name = "R", allow_negative_numbers = true)]
    pub rmax: Option<f64>,

    /// Radius table (default: used_rad.dat in the output directory)
    #[arg(long, value_name = "PATH")]
    pub radius_table: Option<PathBuf>,

    /// Also plot the 1-D radial extension of the grid
    #[arg(help_heading = "1-D extension", long = "with-1d")]
    pub with_1d: bool,

    /// Number of radial cells in the 1-D extension
    #[arg(help_heading = "1-D extension", long = "nrad-1d", value_name = "N")]
    pub nrad_1d: Option<usize>,

    /// Radius table for the 1-D extension (default: used_rad1D.dat)
    #[arg(help_heading = "1-D extension", long = "radius-table-1d", value_name = "PATH")]
    pub radius_table_1d: Option<PathBuf>,

    /// Plot log10 of the values
    #[arg(help_heading = "Plot options", short, long)]
    pub log: bool,

    /// Cartesian view of the disk
    #[arg(help_heading = "Plot options", short = 'c', long)]
    pub polar: bool,

    /// Swap sin and cos in the polar view
    #[arg(help_heading = "Plot options", long)]
    pub rotate: bool,

    /// Azimuthally averaged radial profile
    #[arg(help_heading = "Plot options", long)]
    pub curve: bool,

    /// Colour axis range as min:max
    #[arg(help_heading = "Plot options", long, value_name = "MIN:MAX", allow_hyphen_values = true)]
    pub cbrange: Option<Range>,

    /// X axis range as min:max
    #[arg(help_heading = "Plot options", long, value_name = "MIN:MAX", allow_hyphen_values = true)]
    pub xrange: Option<Range>,

    /// Y axis range as min:max
    #[arg(help_heading = "Plot options", long, value_name = "MIN:MAX", allow_hyphen_values = true)]
    pub yrange: Option<Range>,

    /// Palette definition, e.g. "rgbformulae 22,13,-31"
    #[arg(help_heading = "Plot options", long, value_name = "SPEC", allow_hyphen_values = true)]
    pub palette: Option<String>,

    /// Plot title (default: capitalised field name)
    #[arg(help_heading = "Plot options", long, value_name = "TEXT")]
    pub title: Option<String>,

    /// X axis label
    #[arg(help_heading = "Plot options", long, value_name = "TEXT")]
    pub xlabel: Option<String>,

    /// Y axis label
    #[arg(help_heading = "Plot options", long, value_name = "TEXT")]
    pub ylabel: Option<String>,

    /// Colour axis label
    #[arg(help_heading = "Plot options", long, value_name = "TEXT")]
    pub cblabel: Option<String>,

    /// Strip tics, borders, labels and margins
    #[arg(help_heading = "Plot options", long)]
    pub clean: bool,

    /// Square plot area
    #[arg(help_heading = "Plot options", long)]
    pub square: bool,

    /// Multiply surface values by a constant factor
    #[arg(help_heading = "Plot options", long, value_name = "F", allow_negative_numbers = true)]
    pub scale: Option<f64>,

    /// Export to PNG instead of opening a window
    #[arg(help_heading = "Output", long, value_name = "PATH", conflicts_with = "eps")]
    pub png: Option<PathBuf>,

    /// Export to EPS instead of opening a window
    #[arg(help_heading = "Output", long, value_name = "PATH")]
    pub eps: Option<PathBuf>,

    /// Keep scratch files after a successful run
    #[arg(help_heading = "Output", long)]
    pub keep: bool,

    /// Print the script to stdout instead of running gnuplot
    ///
    /// Implies --keep, so the data files the script reads are left in the
    /// temporary directory for the printed script to use.
    #[arg(help_heading = "Output", long)]
    pub print_script: bool,

    /// Renderer executable
    #[arg(help_heading = "Output", long, value_name = "PROGRAM", default_value = "gnuplot")]
    pub gnuplot: String,

    /// Accept field files that do not match the grid size
    #[arg(long)]
    pub allow_truncated: bool,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[arg(help_heading = "Flags", short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode
    #[arg(help_heading = "Flags", short, long)]
    pub quiet: bool,
}
