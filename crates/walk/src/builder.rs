use crate::error::WalkError;
use crate::walker::Walker;
use rustc_hash::FxHashSet;
use std::ffi::OsString;
use std::path::PathBuf;

/// Options for walking one package tree.
///
/// By default the root itself is yielded first, symlinks are reported but
/// never entered and no directory is pruned.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    pub(crate) root: PathBuf,
    pub(crate) skip_root: bool,
    pub(crate) follow_symlinks: bool,
    pub(crate) prune: FxHashSet<OsString>,
}

impl WalkBuilder {
    /// Starts a configuration for the tree at `root`.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            skip_root: false,
            follow_symlinks: false,
            prune: FxHashSet::default(),
        }
    }

    /// Enters directories reached through symlinks.
    ///
    /// Entries below a followed link keep the link's relative path as their
    /// prefix. Every directory is entered at most once, keyed by its
    /// canonical path, so self-referencing links terminate.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Whether the root is the first yielded entry.
    #[must_use]
    pub const fn include_root(mut self, include: bool) -> Self {
        self.skip_root = !include;
        self
    }

    /// Directory names that are skipped wholesale, at any depth.
    ///
    /// Only directories (or symlinks to directories) are pruned. A regular
    /// file that happens to share a pruned name is still yielded.
    #[must_use]
    pub fn prune_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.prune.extend(names.into_iter().map(Into::into));
        self
    }

    /// Inspects the root and returns the iterator.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::WalkErrorKind::Root`] when the root cannot be
    /// examined, or with a listing error when a directory root is unreadable.
    pub fn build(self) -> Result<Walker, WalkError> {
        Walker::start(self)
    }
}
