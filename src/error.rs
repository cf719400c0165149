use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Conditions that abort the whole run. Per-candidate failures are
/// [`crate::metric::Outcome`] values instead.
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Failed to read candidate list '{}': {source}", path.display())]
    CandidateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}
