//! Result and Error types for the par module

/// Type alias for `Result<T, par::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// The error type for `hydroplot-par`
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// A recognised key was given without a value
    #[error("line {line}: no value given for \"{key}\"")]
    MissingValue { line: usize, key: String },

    /// A recognised key has a value of the wrong type
    #[error("line {line}: expected {expected} for \"{key}\", found \"{value}\"")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
        expected: &'static str,
    },
}
