//! Result and Error types for hydroplot-script

/// Type alias for Result<T, script::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `hydroplot-script` crate
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("failed to read a range from \"{0}\" (expected min:max)")]
    InvalidRange(String),
}
