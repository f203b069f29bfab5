use std::io;

use archive::{ArchiveError, CopyError};
use engine::{ManifestError, SelectError};

/// Exit code for a completed run.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for selection, manifest, archive or output failures.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for invalid command-line usage.
pub const EXIT_USAGE: i32 = 2;

/// Failures reported by [`run`](crate::run).
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Select(#[from] SelectError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Copy(#[from] CopyError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
