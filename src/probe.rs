//! Running the external collision finder.

use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};
use tracing::debug;

/// Where the collision finder is looked for when no other path is
/// given, relative to the working directory.
pub const DEFAULT_EXECUTABLE: &str = "bin/hash_collision";

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("failed to run {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} exited with {status}", path.display())]
    Status { path: PathBuf, status: ExitStatus },
}

/// Something that searches for a collision on `bits` common bits and
/// returns the text it printed.
pub trait Probe {
    fn measure(&mut self, bits: u32) -> Result<String, ProbeError>;
}

impl<F> Probe for F
where F: FnMut(u32) -> Result<String, ProbeError> {
    fn measure(&mut self, bits: u32) -> Result<String, ProbeError> {
        self(bits)
    }
}

/// The collision finder as an executable, invoked as `<path> <bits>`.
#[derive(Debug, Clone)]
pub struct Executable {
    path: PathBuf,
}

impl Executable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Executable { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for Executable {
    fn default() -> Self {
        Self::new(DEFAULT_EXECUTABLE)
    }
}

impl Probe for Executable {
    /// Run the executable to completion and return its standard
    /// output.  Its standard error goes to ours.
    fn measure(&mut self, bits: u32) -> Result<String, ProbeError> {
        debug!(path = %self.path.display(), bits, "spawning collision finder");
        let output = Command::new(&self.path)
            .arg(bits.to_string())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| ProbeError::Spawn {
                path: self.path.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(ProbeError::Status {
                path: self.path.clone(),
                status: output.status,
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
