//! Per-invocation scratch files

// standard library
use std::path::{Path, PathBuf};

// hydroplot modules
use hydroplot::utils::f;

// external crates
use log::{debug, info, warn};
use uuid::Uuid;

/// Scratch files for one invocation, removed when dropped
///
/// Every name carries the same random token so that concurrent invocations
/// never share files. Nothing is created here, the paths are only reserved.
#[derive(Debug)]
pub struct ScratchFiles {
    /// Reformatted field records
    pub data: PathBuf,
    /// Reformatted 1-D extension records
    pub data_1d: PathBuf,
    /// Gnuplot script
    pub script: PathBuf,
    keep: bool,
}

impl ScratchFiles {
    /// Reserve scratch paths in the system temporary directory
    pub fn new() -> Self {
        Self::in_dir(std::env::temp_dir())
    }

    /// Reserve scratch paths in `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let token = Uuid::new_v4().simple().to_string();
        let dir = dir.as_ref();
        debug!("Scratch token {token}");

        Self {
            data: dir.join(f!("hydroplot-{token}.bin")),
            data_1d: dir.join(f!("hydroplot-{token}_1d.bin")),
            script: dir.join(f!("hydroplot-{token}.gp")),
            keep: false,
        }
    }

    /// Leave the files in place when dropped
    pub fn keep(&mut self) {
        self.keep = true;
    }

    /// All reserved paths
    pub fn paths(&self) -> [&Path; 3] {
        [self.data.as_path(), self.data_1d.as_path(), self.script.as_path()]
    }

    /// Delete whichever files were created
    fn remove(&self) {
        for path in self.paths().into_iter().filter(|p| p.exists()) {
            match std::fs::remove_file(path) {
                Ok(()) => debug!("Removed {}", path.display()),
                Err(e) => warn!("Unable to remove {} ({e})", path.display()),
            }
        }
    }
}

impl Default for ScratchFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScratchFiles {
    fn drop(&mut self) {
        if self.keep {
            for path in self.paths().into_iter().filter(|p| p.exists()) {
                info!("Kept {}", path.display());
            }
        } else {
            self.remove();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_names() {
        let dir = tempfile::tempdir().unwrap();
        let a = ScratchFiles::in_dir(dir.path());
        let b = ScratchFiles::in_dir(dir.path());

        assert_ne!(a.data, b.data);
        assert_ne!(a.script, b.script);
        assert!(a.paths().iter().all(|p| p.starts_with(dir.path())));
        assert!(a.data.to_string_lossy().ends_with(".bin"));
        assert!(a.script.to_string_lossy().ends_with(".gp"));
    }

    #[test]
    fn removed_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let scratch = ScratchFiles::in_dir(dir.path());
        std::fs::write(&scratch.data, b"records").unwrap();
        std::fs::write(&scratch.script, b"splot").unwrap();

        let paths: Vec<PathBuf> = scratch.paths().iter().map(|p| p.to_path_buf()).collect();
        drop(scratch);

        assert!(paths.iter().all(|p| !p.exists()));
    }

    #[test]
    fn kept_on_request() {
        let dir = tempfile::tempdir().unwrap();
        let mut scratch = ScratchFiles::in_dir(dir.path());
        std::fs::write(&scratch.script, b"splot").unwrap();

        let script = scratch.script.clone();
        scratch.keep();
        drop(scratch);

        assert!(script.exists());
    }
}
