//! Error types for the engine crate.

use std::io;
use std::path::PathBuf;

use filters::PatternError;
use walk::WalkError;

/// Errors raised while reading or validating a package manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read manifest {}: {source}", path.display())]
    Read {
        /// Manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The manifest is not valid JSON or has fields of the wrong type.
    #[error("failed to parse manifest {}: {source}", path.display())]
    Parse {
        /// Manifest path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A field required for packing is absent or empty.
    #[error("package manifest is missing the \"{0}\" field")]
    MissingField(&'static str),
}

/// Errors that abort a file selection.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// The package manifest could not be loaded.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Traversing the package tree failed.
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// A governing ignore file could not be read.
    #[error("failed to read ignore file {}: {source}", path.display())]
    ReadIgnoreFile {
        /// Path of the ignore file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A rule pattern is not a valid glob.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl SelectError {
    pub(crate) fn read_ignore_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadIgnoreFile {
            path: path.into(),
            source,
        }
    }
}
