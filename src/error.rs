//! Error type for the shell sort front end.
//!
//! Sorting itself cannot fail. Errors only come from the outside world:
//! reading stdin, writing stdout, writing a benchmark report, or a benchmark
//! configuration that cannot be run. A malformed input token is not an error,
//! it just ends the input.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellSortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write report to {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `--sizes` held something other than a comma-separated list of
    /// positive integers.
    #[error("invalid benchmark size list '{0}': expected comma-separated positive integers")]
    InvalidSizes(String),

    #[error("benchmark repetitions must be at least 1")]
    ZeroReps,
}

pub type Result<T> = std::result::Result<T, ShellSortError>;
