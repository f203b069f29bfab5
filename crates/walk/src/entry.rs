use std::ffi::OsStr;
use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// A filesystem object found during a walk.
///
/// The metadata is captured with `symlink_metadata`, so a symlink describes
/// the link and not its target.
#[derive(Debug)]
pub struct WalkEntry {
    path: PathBuf,
    relative: PathBuf,
    metadata: Metadata,
    depth: usize,
}

impl WalkEntry {
    pub(crate) const fn new(
        path: PathBuf,
        relative: PathBuf,
        metadata: Metadata,
        depth: usize,
    ) -> Self {
        Self {
            path,
            relative,
            metadata,
            depth,
        }
    }

    /// Absolute location on disk.
    #[must_use]
    pub fn full_path(&self) -> &Path {
        &self.path
    }

    /// Location below the walk root. Empty for the root itself.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative
    }

    /// Drops everything but the relative path.
    #[must_use]
    pub fn into_relative_path(self) -> PathBuf {
        self.relative
    }

    /// Metadata of the entry itself.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// True for real directories; a symlink to a directory is not one.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    /// Last component of the relative path, `None` for the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ffi::OsStr;
    /// use walk::WalkBuilder;
    ///
    /// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
    /// let temp = tempfile::tempdir()?;
    /// std::fs::create_dir(temp.path().join("bin"))?;
    /// std::fs::write(temp.path().join("bin/cli.js"), b"")?;
    ///
    /// let names: Vec<_> = WalkBuilder::new(temp.path())
    ///     .build()?
    ///     .map(|entry| entry.map(|entry| entry.file_name().map(OsStr::to_owned)))
    ///     .collect::<Result<_, _>>()?;
    /// assert_eq!(names, [None, Some("bin".into()), Some("cli.js".into())]);
    /// # Ok(())
    /// # }
    /// # demo().unwrap();
    /// ```
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        if self.is_root() {
            return None;
        }
        self.relative.file_name()
    }

    /// Number of components between the root and this entry.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The root is the only entry at depth zero.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.depth == 0
    }
}
