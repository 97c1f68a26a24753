//! Locating numbered outputs in a simulation output directory

// standard library
use std::path::Path;

// hydroplot modules
use hydroplot::utils::f;

// crate modules
use crate::error::{Error, Result};

// external crates
use log::{debug, trace};

/// File name of output `number` for `field`, e.g. `gasdens10.dat`
pub fn output_name(field: &str, number: usize) -> String {
    f!("gas{field}{number}.dat")
}

/// File name of the 1-D extension, e.g. `gasdens1D10.dat`
pub fn extension_name(field: &str, number: usize) -> String {
    f!("gas{field}1D{number}.dat")
}

/// Output number of a `gas<field><N>.dat` file name
pub fn output_number(file_name: &str, field: &str) -> Option<usize> {
    file_name
        .strip_prefix("gas")?
        .strip_prefix(field)?
        .strip_suffix(".dat")?
        .parse()
        .ok()
}

/// Highest output number for `field` found in `dir`
pub fn latest_output(dir: &Path, field: &str) -> Result<usize> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        Error::Config(f!("unable to read output directory {} ({e})", dir.display()))
    })?;

    let latest = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().to_str().map(String::from))
        .filter_map(|name| {
            let number = output_number(&name, field);
            trace!("{name}: {number:?}");
            number
        })
        .max();

    match latest {
        Some(number) => {
            debug!("Most recent {field} output is number {number}");
            Ok(number)
        }
        None => Err(Error::Config(f!(
            "no gas{field}<N>.dat outputs found in {}",
            dir.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("gasdens10.dat", "dens", Some(10))]
    #[case("gasdens0.dat", "dens", Some(0))]
    #[case("gasvrad7.dat", "dens", None)]
    #[case("gasdens1D10.dat", "dens", None)]
    #[case("gasdens.dat", "dens", None)]
    #[case("gasdens10.dat.bak", "dens", None)]
    fn numbers(#[case] name: &str, #[case] field: &str, #[case] expected: Option<usize>) {
        assert_eq!(output_number(name, field), expected);
    }

    #[test]
    fn names() {
        assert_eq!(output_name("vtheta", 3), "gasvtheta3.dat");
        assert_eq!(extension_name("dens", 12), "gasdens1D12.dat");
    }

    #[test]
    fn picks_highest_number() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["gasdens2.dat", "gasdens10.dat", "gasdens9.dat", "gasdens1D40.dat", "gasvrad50.dat"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        assert_eq!(latest_output(dir.path(), "dens").unwrap(), 10);
        assert_eq!(latest_output(dir.path(), "vrad").unwrap(), 50);
    }

    #[test]
    fn nothing_found() {
        let dir = tempfile::tempdir().unwrap();
        let error = latest_output(dir.path(), "dens").unwrap_err();
        assert!(error.is_usage());
        assert!(error.to_string().contains("gasdens<N>.dat"));
    }
}
