use std::path::PathBuf;

use thiserror::Error;

/// Errors loading a job file.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("failed to read job file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse job file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
