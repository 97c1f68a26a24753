//! Write operations for reformatted records

// standard library
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// crate modules
use crate::error::Result;

// external crates
use bincode::serialize_into;
use log::trace;
use serde::Serialize;

/// Write records back to back into a binary file
///
/// Each record is serialised with fixed-width little-endian encoding, so a
/// [Record](crate::Record) is always 24 bytes and a
/// [ProfileRecord](crate::ProfileRecord) always 16 bytes. There is no header.
///
/// ```rust, no_run
/// # use hydroplot_grid::{write_records, ProfileRecord};
/// let profile = vec![
///     ProfileRecord { radius: 0.4, average: 1.0 },
///     ProfileRecord { radius: 0.5, average: 0.8 },
/// ];
/// write_records(&profile, "/tmp/profile.bin").unwrap();
/// ```
pub fn write_records<T: Serialize, P: AsRef<Path>>(records: &[T], path: P) -> Result<()> {
    let mut writer = init_writer(path.as_ref())?;
    for record in records {
        serialize_into(&mut writer, record)?;
    }
    writer.flush()?;
    trace!("Wrote {} records to {}", records.len(), path.as_ref().display());
    Ok(())
}

/// Initialise a writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
