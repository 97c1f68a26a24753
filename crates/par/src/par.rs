// standard library
use std::path::PathBuf;

// hydroplot modules
use hydroplot_utils::{f, OptionExt};

/// Grid values recovered from a `.par` run configuration file
///
/// Every field is optional because nothing forces a run configuration to
/// state them, and command line flags can fill in or override any of them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParFile {
    /// Number of radial cells
    pub nrad: Option<usize>,
    /// Number of azimuthal cells
    pub nsec: Option<usize>,
    /// Inner edge of the radial domain
    pub rmin: Option<f64>,
    /// Outer edge of the radial domain
    pub rmax: Option<f64>,
    /// Directory the simulation writes its outputs to
    pub output_dir: Option<PathBuf>,
}

impl std::fmt::Display for ParFile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let dir = self.output_dir.as_ref().map(|p| p.display());
        let mut s = "ParFile {\n".to_string();
        s += &f!("    nrad: {}\n", self.nrad.display());
        s += &f!("    nsec: {}\n", self.nsec.display());
        s += &f!("    rmin: {}\n", self.rmin.display());
        s += &f!("    rmax: {}\n", self.rmax.display());
        s += &f!("    output_dir: {}\n}}", dir.display());
        write!(f, "{}", s)
    }
}

/// Keys recognised in a `.par` file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `Nrad`, number of radial cells
    Nrad,
    /// `Nsec`, number of azimuthal cells
    Nsec,
    /// `Rmin`, inner radius
    Rmin,
    /// `Rmax`, outer radius
    Rmax,
    /// `OutputDir`, simulation output directory
    OutputDir,
}

impl Key {
    /// Match a key name regardless of case
    ///
    /// ```rust
    /// # use hydroplot_par::Key;
    /// assert_eq!(Key::from_name("NRAD"), Some(Key::Nrad));
    /// assert_eq!(Key::from_name("outputdir"), Some(Key::OutputDir));
    /// assert_eq!(Key::from_name("AspectRatio"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        [Key::Nrad, Key::Nsec, Key::Rmin, Key::Rmax, Key::OutputDir]
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(name))
    }

    /// Canonical spelling of the key
    pub fn name(&self) -> &'static str {
        match self {
            Key::Nrad => "Nrad",
            Key::Nsec => "Nsec",
            Key::Rmin => "Rmin",
            Key::Rmax => "Rmax",
            Key::OutputDir => "OutputDir",
        }
    }
}
