//! Running the external renderer

// standard library
use std::path::Path;

// crate modules
use crate::error::{Error, Result};

// external crates
use log::{debug, info};
use tokio::process::Command;

/// Run `program` on the script at `script` and wait for it to exit
///
/// The child is killed if the returned future is dropped before it exits,
/// which is how an interrupt stops the renderer.
pub async fn render(program: &str, script: &Path) -> Result<()> {
    info!("Running {program} {}", script.display());

    let status = Command::new(program)
        .arg(script)
        .kill_on_drop(true)
        .status()
        .await
        .map_err(|source| Error::Spawn {
            program: program.to_string(),
            source,
        })?;

    debug!("{program} exited with {status}");

    match status.success() {
        true => Ok(()),
        false => Err(Error::Renderer(status)),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success() {
        assert!(render("true", Path::new("plot.gp")).await.is_ok());
    }

    #[tokio::test]
    async fn failure_status() {
        let error = render("false", Path::new("plot.gp")).await.unwrap_err();
        assert!(matches!(error, Error::Renderer(_)));
        assert_eq!(error.exit_code(), 1);
    }

    #[tokio::test]
    async fn missing_program() {
        let error = render("hydroplot-no-such-renderer", Path::new("plot.gp"))
            .await
            .unwrap_err();
        assert!(matches!(error, Error::Spawn { .. }));
    }
}
