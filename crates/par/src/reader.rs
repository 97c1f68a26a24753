//! Reading `.par` files into a [ParFile]

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::error::{Error, Result};
use crate::par::{Key, ParFile};
use crate::parsers::{self, Line};

// external crates
use log::{debug, trace};

/// Read the recognised grid values from a `.par` file at `path`
///
/// ```rust, no_run
/// # use hydroplot_par::read_par_file;
/// let par = read_par_file("./in/template.par").unwrap();
/// println!("{par}");
/// ```
pub fn read_par_file<P: AsRef<Path>>(path: P) -> Result<ParFile> {
    let path = path.as_ref();
    debug!("Reading run configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_par(&content)
}

/// Parse the content of a `.par` file
///
/// Unrecognised keys are skipped. Recognised keys must carry a value of the
/// right type, and a key given twice keeps the last value.
pub fn parse_par(content: &str) -> Result<ParFile> {
    let mut par = ParFile::default();

    for (idx, text) in content.lines().enumerate() {
        let line = idx + 1;

        let (name, value) = match parsers::line(text) {
            Ok((_, Line::Entry { key, value })) => (key, value),
            Ok(_) => continue,
            Err(e) => {
                trace!("line {line}: skipped ({e:?})");
                continue;
            }
        };

        let Some(key) = Key::from_name(name) else {
            trace!("line {line}: ignoring unrecognised key \"{name}\"");
            continue;
        };

        let value = value.ok_or_else(|| Error::MissingValue {
            line,
            key: name.to_string(),
        })?;

        assign(&mut par, key, value).map_err(|expected| Error::InvalidValue {
            line,
            key: name.to_string(),
            value: value.to_string(),
            expected,
        })?;

        trace!("line {line}: {} = {value}", key.name());
    }

    Ok(par)
}

/// Store a value against its key, or describe the type that was expected
fn assign(par: &mut ParFile, key: Key, value: &str) -> core::result::Result<(), &'static str> {
    match key {
        Key::Nrad => par.nrad = Some(cell_count(value)?),
        Key::Nsec => par.nsec = Some(cell_count(value)?),
        Key::Rmin => par.rmin = Some(radius(value)?),
        Key::Rmax => par.rmax = Some(radius(value)?),
        Key::OutputDir => par.output_dir = Some(PathBuf::from(value)),
    }
    Ok(())
}

fn cell_count(value: &str) -> core::result::Result<usize, &'static str> {
    parsers::count(value)
        .map(|(_, n)| n)
        .map_err(|_| "an unsigned integer")
}

fn radius(value: &str) -> core::result::Result<f64, &'static str> {
    match parsers::float(value) {
        Ok((_, r)) if r.is_finite() => Ok(r),
        _ => Err("a finite number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        let par = parse_par("NRAD 10\nnsec 20\nrMin 0.5\nRMAX 1.5\noutputdir out/").unwrap();
        assert_eq!(par.nrad, Some(10));
        assert_eq!(par.nsec, Some(20));
        assert_eq!(par.rmin, Some(0.5));
        assert_eq!(par.rmax, Some(1.5));
        assert_eq!(par.output_dir, Some(PathBuf::from("out/")));
    }

    #[test]
    fn last_value_wins() {
        let par = parse_par("Nrad 10\nNrad 12").unwrap();
        assert_eq!(par.nrad, Some(12));
    }

    #[test]
    fn unrecognised_keys_are_ignored() {
        let par = parse_par("AspectRatio 0.05\nPlanetConfig in/Jupiter.cfg\nDt").unwrap();
        assert_eq!(par, ParFile::default());
    }

    #[test]
    fn missing_value_reports_line() {
        let err = parse_par("# header\nNrad 10\nNsec").unwrap_err();
        assert!(matches!(err, Error::MissingValue { line: 3, .. }));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = parse_par("Nrad ten").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue {
                line: 1,
                expected: "an unsigned integer",
                ..
            }
        ));

        let err = parse_par("Rmin\tnan").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidValue {
                expected: "a finite number",
                ..
            }
        ));
    }
}
