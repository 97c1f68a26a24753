//! Resolution of command line flags and run configuration into settings

// standard library
use std::path::{Path, PathBuf};

// hydroplot modules
use hydroplot::grid::{read_radius_table, GridShape, RadialAxis, Reformatter};
use hydroplot::par::{read_par_file, ParFile};
use hydroplot::script::{Orientation, OutputMode, PlotConfig, Projection};
use hydroplot::utils::f;

// crate modules
use crate::cli::Cli;
use crate::discover::{extension_name, latest_output, output_name, output_number};
use crate::error::{Error, Result};

// external crates
use log::{debug, warn};

/// Default radius table names in the output directory
const RADIUS_TABLE: &str = "used_rad.dat";
const RADIUS_TABLE_1D: &str = "used_rad1D.dat";

/// Field file to reformat, its grid and where its radii come from
#[derive(Debug, Clone, PartialEq)]
pub struct GridSource {
    /// Raw field file
    pub path: PathBuf,
    /// Grid dimensions
    pub shape: GridShape,
    /// Radius table, linear radii if not found
    pub radius_table: Option<PathBuf>,
}

/// Fully resolved options for one invocation
///
/// Flags take priority over `.par` values, which take priority over the
/// defaults. Everything is validated here, before any file is created.
#[derive(Debug)]
pub struct Settings {
    /// Field to plot
    pub primary: GridSource,
    /// Optional 1-D radial extension
    pub extension: Option<GridSource>,
    /// Inner radius for linear axes
    pub rmin: f64,
    /// Outer radius for linear axes
    pub rmax: f64,
    /// Reformatting options
    pub reformatter: Reformatter,
    /// Plot options
    pub plot: PlotConfig,
    /// Renderer executable
    pub renderer: String,
    /// Keep scratch files after success
    pub keep: bool,
    /// Print the script rather than render it
    pub print_script: bool,
}

impl Settings {
    /// Resolve settings from parsed flags and the `.par` file they point to
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let par = match &cli.par {
            Some(path) => {
                let par = read_par_file(path)?;
                debug!("{par}");
                par
            }
            None => ParFile::default(),
        };

        let dir = output_dir(cli, &par);
        debug!("Output directory {}", dir.display());

        let nrad = required("nrad", cli.nrad.or(par.nrad))?;
        let nsec = required("nsec", cli.nsec.or(par.nsec))?;
        let shape = valid_shape(nrad, nsec)?;

        let (path, number) = match &cli.file {
            Some(file) => {
                let number = cli.number.or_else(|| {
                    file.file_name()
                        .and_then(|name| name.to_str())
                        .and_then(|name| output_number(name, &cli.field))
                });
                (file.clone(), number)
            }
            None => {
                let number = match cli.number {
                    Some(number) => number,
                    None => latest_output(&dir, &cli.field)?,
                };
                (dir.join(output_name(&cli.field, number)), Some(number))
            }
        };

        check_input(&path)?;

        let primary = GridSource {
            path,
            shape,
            radius_table: radius_table(&cli.radius_table, &dir, RADIUS_TABLE)?,
        };

        let extension = match cli.with_1d {
            true => Some(extension_source(cli, &dir, number, nsec)?),
            false => {
                if cli.nrad_1d.is_some() || cli.radius_table_1d.is_some() {
                    warn!("1-D options are ignored without --with-1d");
                }
                None
            }
        };

        let settings = Self {
            primary,
            extension,
            rmin: cli.rmin.or(par.rmin).unwrap_or(0.0),
            rmax: cli.rmax.or(par.rmax).unwrap_or(0.0),
            reformatter: reformatter(cli),
            plot: plot_config(cli),
            renderer: cli.gnuplot.clone(),
            // a printed script is only useful if its data files survive
            keep: cli.keep || cli.print_script,
            print_script: cli.print_script,
        };

        debug!("{settings:#?}");
        Ok(settings)
    }

    /// Radial axis for a grid source
    ///
    /// Reads the radius table if there is one, so this can fail on the data.
    pub fn axis(&self, source: &GridSource) -> Result<RadialAxis> {
        match &source.radius_table {
            Some(path) => Ok(RadialAxis::Table(read_radius_table(path)?)),
            None => Ok(RadialAxis::linear(self.rmin, self.rmax)),
        }
    }
}

/// Explicit flag, then `.par` OutputDir, then the directory of an explicit file
fn output_dir(cli: &Cli, par: &ParFile) -> PathBuf {
    if let Some(dir) = cli.dir.as_ref().or(par.output_dir.as_ref()) {
        return dir.clone();
    }

    cli.file
        .as_ref()
        .and_then(|file| file.parent())
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn required(name: &str, value: Option<usize>) -> Result<usize> {
    value.ok_or_else(|| {
        Error::Config(f!("{name} is unknown, give --{name} or a .par file that sets it"))
    })
}

fn valid_shape(nrad: usize, nsec: usize) -> Result<GridShape> {
    let shape = GridShape::new(nrad, nsec);
    shape.validate().map_err(|e| Error::Config(e.to_string()))?;
    Ok(shape)
}

fn check_input(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(Error::Config(f!(
            "{} is a directory, expected a field file",
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(Error::Config(f!("input file {} not found", path.display())));
    }

    Ok(())
}

/// Explicit table must exist, the default is only used if present
fn radius_table(explicit: &Option<PathBuf>, dir: &Path, default: &str) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.clone())),
        Some(path) => Err(Error::Config(f!("radius table {} not found", path.display()))),
        None => {
            let path = dir.join(default);
            match path.is_file() {
                true => Ok(Some(path)),
                false => {
                    debug!("No {default} in {}, radii are linear", dir.display());
                    Ok(None)
                }
            }
        }
    }
}

fn extension_source(cli: &Cli, dir: &Path, number: Option<usize>, nsec: usize) -> Result<GridSource> {
    let number = number.ok_or_else(|| {
        Error::Config("unable to tell the output number for the 1-D extension, give --number".into())
    })?;

    let nrad = required("nrad-1d", cli.nrad_1d)?;
    let path = dir.join(extension_name(&cli.field, number));
    check_input(&path)?;

    Ok(GridSource {
        path,
        shape: valid_shape(nrad, nsec)?,
        radius_table: radius_table(&cli.radius_table_1d, dir, RADIUS_TABLE_1D)?,
    })
}

fn reformatter(cli: &Cli) -> Reformatter {
    Reformatter::builder()
        .log_scale(cli.log)
        .curve(cli.curve)
        .allow_truncated(cli.allow_truncated)
        .build()
}

fn plot_config(cli: &Cli) -> PlotConfig {
    if cli.rotate && !cli.polar {
        warn!("--rotate only applies to polar plots");
    }

    let projection = match (cli.polar, cli.rotate) {
        (false, _) => Projection::Rectangular,
        (true, false) => Projection::Polar(Orientation::CosSin),
        (true, true) => Projection::Polar(Orientation::SinCos),
    };

    let output = match (&cli.png, &cli.eps) {
        (Some(path), _) => OutputMode::Png(path.clone()),
        (None, Some(path)) => OutputMode::Eps(path.clone()),
        (None, None) => OutputMode::Interactive,
    };

    PlotConfig::builder()
        .field(&cli.field)
        .log_scale(cli.log)
        .projection(projection)
        .curve(cli.curve)
        .cbrange(cli.cbrange)
        .xrange(cli.xrange)
        .yrange(cli.yrange)
        .palette(cli.palette.clone())
        .title(cli.title.clone())
        .xlabel(cli.xlabel.clone())
        .ylabel(cli.ylabel.clone())
        .cblabel(cli.cblabel.clone())
        .output(output)
        .clean(cli.clean)
        .square(cli.square)
        .scale_factor(cli.scale)
        .build()
}
