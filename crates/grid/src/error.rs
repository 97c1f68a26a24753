//! Result and Error types for the grid module

/// Type alias for `Result<T, grid::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `hydroplot-grid`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Failure to serialise records to a byte stream
    #[error("failed to serialise records")]
    UnableToSerialise(#[from] Box<bincode::ErrorKind>),

    /// Grid needs at least one radial row, two azimuthal sectors and an addressable size
    #[error("invalid grid dimensions {nrad}x{nsec} (need nrad > 0, nsec > 1 and a size that fits in memory)")]
    InvalidDimensions { nrad: usize, nsec: usize },

    /// Radius table does not cover every radial row
    #[error("radius table too short (expected at least {expected:?}, found {found:?})")]
    RadiusTableTooShort { expected: usize, found: usize },

    /// Line of a radius table that is not a number
    #[error("line {line}: failed to read a radius from \"{text}\"")]
    MalformedRadius { line: usize, text: String },

    /// Field file size does not match the declared grid
    #[error("unexpected byte length (expected {expected:?}, found {found:?})")]
    UnexpectedByteLength { expected: usize, found: usize },
}
