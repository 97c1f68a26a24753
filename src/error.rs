//! Result and Error types for the hydroplot binary

// standard library
use std::process::ExitStatus;

/// Type alias for `Result<T, hydroplot::Error>`
pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
/// Everything that can stop a plot, with the exit code it maps to
pub enum Error {
    /// Inconsistent or incomplete options
    #[error("{0}")]
    Config(String),

    /// Unreadable or malformed run configuration
    #[error("invalid run configuration")]
    Par(#[from] hydroplot::par::Error),

    /// Failure while reading or reformatting grid data
    #[error("failed to reformat grid data")]
    Grid(#[from] hydroplot::grid::Error),

    /// Failure writing the script or printing it
    #[error("failure in file I/O")]
    IOError(#[from] std::io::Error),

    /// Blocking reformat task did not complete
    #[error("reformatting task failed")]
    Task(#[from] tokio::task::JoinError),

    /// Renderer could not be started
    #[error("unable to run \"{program}\"")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// Renderer ran but reported a failure
    #[error("renderer exited with {0}")]
    Renderer(ExitStatus),

    /// Interrupt signal received
    #[error("interrupted")]
    Interrupted,
}

impl Error {
    /// Process exit code for the error
    ///
    /// Anything wrong with the options is a usage error (-1), everything else
    /// happens after scratch files exist and exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Par(_) => -1,
            _ => 1,
        }
    }

    /// True for problems with the options rather than the data
    pub fn is_usage(&self) -> bool {
        self.exit_code() == -1
    }
}
