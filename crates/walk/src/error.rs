use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The step of a walk that failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WalkErrorKind {
    /// The root could not be stat'ed or made absolute.
    Root,
    /// A directory could not be opened for listing.
    ListDirectory,
    /// Listing started but one of the children could not be read.
    ReadEntry,
    /// A child could not be stat'ed.
    Stat,
    /// A directory could not be canonicalized for cycle detection.
    Resolve,
}

impl WalkErrorKind {
    const fn verb(self) -> &'static str {
        match self {
            Self::Root => "open package root",
            Self::ListDirectory => "list",
            Self::ReadEntry => "read an entry of",
            Self::Stat => "stat",
            Self::Resolve => "resolve",
        }
    }
}

/// I/O failure that ended a walk, tagged with the path involved.
#[derive(Debug)]
pub struct WalkError {
    kind: WalkErrorKind,
    path: PathBuf,
    source: io::Error,
}

impl WalkError {
    pub(crate) fn new(kind: WalkErrorKind, path: &Path, source: io::Error) -> Self {
        Self {
            kind,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Which step failed.
    #[must_use]
    pub const fn kind(&self) -> WalkErrorKind {
        self.kind
    }

    /// The path being processed when the failure happened.
    ///
    /// ```
    /// use walk::{WalkBuilder, WalkErrorKind};
    ///
    /// let Err(error) = WalkBuilder::new("./no_such_package_dir").build() else {
    ///     panic!("walking a missing root must fail");
    /// };
    /// assert_eq!(error.kind(), WalkErrorKind::Root);
    /// assert!(error.path().ends_with("no_such_package_dir"));
    /// ```
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot {} '{}': {}",
            self.kind.verb(),
            self.path.display(),
            self.source
        )
    }
}

impl Error for WalkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
