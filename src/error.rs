use std::io;

use crate::{parse::ParseError, plot, probe::ProbeError};

/// Why a single measurement failed.
#[derive(Debug, thiserror::Error)]
pub enum IterationError {
    #[error(transparent)]
    Probe(#[from] ProbeError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Possible errors of a timing run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Measuring `bits` common bits failed; later measurements were
    /// not attempted.
    #[error("iteration {bits} failed: {source}")]
    Iteration {
        bits: u32,
        #[source]
        source: IterationError,
    },
    #[error("failed to render the chart: {0}")]
    Plot(#[from] plot::Error),
    #[error("failed to write progress: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// The iteration that failed, if the run stopped during the
    /// measurements.
    pub fn bits(&self) -> Option<u32> {
        match self {
            Error::Iteration { bits, .. } => Some(*bits),
            _ => None,
        }
    }
}
