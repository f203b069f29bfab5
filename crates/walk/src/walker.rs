use crate::builder::WalkBuilder;
use crate::entry::WalkEntry;
use crate::error::{WalkError, WalkErrorKind};
use rustc_hash::FxHashSet;
use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io;
use std::iter::FusedIterator;
use std::path::{self, Path, PathBuf};
use std::vec;

/// Depth-first iterator over a package tree.
///
/// Children are listed in byte-wise name order and a directory's subtree is
/// exhausted before its next sibling. The iterator is fused after the first
/// error.
#[derive(Debug)]
pub struct Walker {
    follow_symlinks: bool,
    prune: FxHashSet<OsString>,
    pending_root: Option<WalkEntry>,
    frames: Vec<Frame>,
    entered: FxHashSet<PathBuf>,
    failed: bool,
}

/// A directory whose children are still being handed out.
#[derive(Debug)]
struct Frame {
    dir: PathBuf,
    prefix: PathBuf,
    depth: usize,
    names: vec::IntoIter<OsString>,
}

impl Frame {
    fn open(dir: PathBuf, prefix: PathBuf, depth: usize) -> Result<Self, WalkError> {
        let listing = fs::read_dir(&dir)
            .map_err(|error| WalkError::new(WalkErrorKind::ListDirectory, &dir, error))?;
        let mut names = listing
            .map(|child| child.map(|child| child.file_name()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| WalkError::new(WalkErrorKind::ReadEntry, &dir, error))?;
        names.sort_unstable();
        Ok(Self {
            dir,
            prefix,
            depth,
            names: names.into_iter(),
        })
    }
}

impl Walker {
    pub(crate) fn start(options: WalkBuilder) -> Result<Self, WalkError> {
        let WalkBuilder {
            root,
            skip_root,
            follow_symlinks,
            prune,
        } = options;
        let root = path::absolute(&root)
            .map_err(|error| WalkError::new(WalkErrorKind::Root, &root, error))?;
        logging::trace_walk!("walking package tree at {}", root.display());

        let metadata = fs::symlink_metadata(&root)
            .map_err(|error| WalkError::new(WalkErrorKind::Root, &root, error))?;

        let mut walker = Self {
            follow_symlinks,
            prune,
            pending_root: None,
            frames: Vec::new(),
            entered: FxHashSet::default(),
            failed: false,
        };
        if let Some(dir) = descent_target(&root, &metadata, follow_symlinks)? {
            walker.enter(dir, PathBuf::new(), 0)?;
        }
        if !skip_root {
            walker.pending_root = Some(WalkEntry::new(root, PathBuf::new(), metadata, 0));
        }
        Ok(walker)
    }

    fn enter(&mut self, dir: PathBuf, prefix: PathBuf, depth: usize) -> Result<(), WalkError> {
        let identity = fs::canonicalize(&dir)
            .map_err(|error| WalkError::new(WalkErrorKind::Resolve, &dir, error))?;
        if self.entered.insert(identity) {
            self.frames.push(Frame::open(dir, prefix, depth)?);
        } else {
            logging::trace_walk!("{} was already entered", dir.display());
        }
        Ok(())
    }

    /// Stats one child and schedules its descent. Pruned children yield `None`.
    fn visit(
        &mut self,
        name: &OsString,
        path: PathBuf,
        relative: PathBuf,
        depth: usize,
    ) -> Result<Option<WalkEntry>, WalkError> {
        let metadata = fs::symlink_metadata(&path)
            .map_err(|error| WalkError::new(WalkErrorKind::Stat, &path, error))?;

        if self.prune.contains(name) && leads_to_directory(&path, &metadata) {
            logging::trace_walk!("pruning {}", relative.display());
            return Ok(None);
        }

        if let Some(dir) = descent_target(&path, &metadata, self.follow_symlinks)? {
            self.enter(dir, relative.clone(), depth)?;
        }
        Ok(Some(WalkEntry::new(path, relative, metadata, depth)))
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Some(root) = self.pending_root.take() {
            return Some(Ok(root));
        }

        while let Some(frame) = self.frames.last_mut() {
            let Some(name) = frame.names.next() else {
                self.frames.pop();
                continue;
            };
            let path = frame.dir.join(&name);
            let relative = frame.prefix.join(&name);
            let depth = frame.depth + 1;

            match self.visit(&name, path, relative, depth) {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => {}
                Err(error) => {
                    self.failed = true;
                    self.frames.clear();
                    return Some(Err(error));
                }
            }
        }
        None
    }
}

impl FusedIterator for Walker {}

fn leads_to_directory(path: &Path, metadata: &Metadata) -> bool {
    metadata.is_dir()
        || (metadata.file_type().is_symlink() && fs::metadata(path).is_ok_and(|target| target.is_dir()))
}

/// The directory to list when descending through `path`, if any.
///
/// Real directories are listed in place. A symlink is only followed when
/// enabled, and then through its canonical target.
fn descent_target(
    path: &Path,
    metadata: &Metadata,
    follow_symlinks: bool,
) -> Result<Option<PathBuf>, WalkError> {
    if metadata.is_dir() {
        return Ok(Some(path.to_path_buf()));
    }
    if !(follow_symlinks && metadata.file_type().is_symlink()) {
        return Ok(None);
    }
    match fs::metadata(path) {
        Ok(target) if target.is_dir() => {}
        // Dangling links are reported but never entered.
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(WalkError::new(WalkErrorKind::Stat, path, error)),
        Ok(_) => return Ok(None),
    }
    fs::canonicalize(path)
        .map(Some)
        .map_err(|error| WalkError::new(WalkErrorKind::Resolve, path, error))
}
