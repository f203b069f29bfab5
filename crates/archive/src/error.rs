use std::io;
use std::path::PathBuf;

/// Errors raised while writing a package tarball.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// The destination archive could not be created.
    #[error("failed to create tarball at {}: {source}", path.display())]
    Create {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A selected file could not be inspected or opened.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the selected file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing an entry into the archive failed.
    #[error("failed to append '{name}' to tarball: {source}")]
    Append {
        /// Entry name inside the archive.
        name: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Flushing the tar trailer or the gzip stream failed.
    #[error("failed to finish tarball: {0}")]
    Finish(#[source] io::Error),

    /// The finished archive could not be moved to its destination.
    #[error("failed to move tarball into place at {}: {source}", path.display())]
    Persist {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors raised while copying selected files into a directory.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// The destination is the package root itself.
    #[error("refusing to copy {} onto itself", path.display())]
    SameDirectory {
        /// The shared root and destination.
        path: PathBuf,
    },

    /// A selected file could not be inspected.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path of the selected file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A directory below the destination could not be created.
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Copying one file failed.
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        /// Source file.
        from: PathBuf,
        /// Target file.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl ArchiveError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
