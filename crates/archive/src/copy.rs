use std::fs;
use std::path::{Path, PathBuf};

use engine::SelectionResult;

use crate::error::CopyError;
use crate::tarball::path_below;

/// Counts reported after a selection has been copied.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CopySummary {
    /// Files written below the destination.
    pub files: usize,
    /// Selected paths that did not resolve to a regular file.
    pub skipped: usize,
    /// Total size of the copied files.
    pub bytes: u64,
}

/// Copies every selected file from `root` into `destination`, keeping the
/// relative layout.
///
/// Missing directories are created and existing files are overwritten.
/// Permissions are carried over by [`fs::copy`]. Selected paths that are not
/// regular files are skipped, as are paths that already sit inside
/// `destination` when it lies below `root`.
///
/// # Errors
///
/// Returns [`CopyError::SameDirectory`] when `destination` is `root`, and the
/// other [`CopyError`] variants when a file cannot be inspected, a directory
/// cannot be created or a copy fails.
///
/// # Examples
///
/// ```
/// use archive::copy_selection;
/// use engine::SelectionResult;
/// use std::path::PathBuf;
///
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let source = tempfile::tempdir()?;
/// let target = tempfile::tempdir()?;
/// std::fs::create_dir(source.path().join("lib"))?;
/// std::fs::write(source.path().join("lib/index.js"), b"exports.a = 1;")?;
///
/// let selection: SelectionResult = [PathBuf::from("lib/index.js")].into_iter().collect();
/// let summary = copy_selection(source.path(), &selection, target.path())?;
/// assert_eq!(summary.files, 1);
/// assert_eq!(std::fs::read(target.path().join("lib/index.js"))?, b"exports.a = 1;");
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
pub fn copy_selection(
    root: &Path,
    selection: &SelectionResult,
    destination: &Path,
) -> Result<CopySummary, CopyError> {
    if same_location(root, destination) {
        return Err(CopyError::SameDirectory {
            path: PathBuf::from(destination),
        });
    }
    let nested = path_below(root, destination);

    let mut summary = CopySummary::default();
    for relative in selection {
        if nested.as_deref().is_some_and(|inner| relative.starts_with(inner)) {
            logging::trace_pack!("not copying {} into itself", relative.display());
            summary.skipped += 1;
            continue;
        }

        let from = root.join(relative);
        let metadata = fs::metadata(&from).map_err(|source| CopyError::Read {
            path: from.clone(),
            source,
        })?;
        if !metadata.is_file() {
            logging::trace_pack!("skipping {}: not a regular file", relative.display());
            summary.skipped += 1;
            continue;
        }

        let to = destination.join(relative);
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).map_err(|source| CopyError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let bytes = fs::copy(&from, &to).map_err(|source| CopyError::Copy {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        logging::trace_pack!("copied {} ({bytes} bytes)", relative.display());
        summary.files += 1;
        summary.bytes += bytes;
    }

    logging::trace_pack!(
        "copied {} files into {}",
        summary.files,
        destination.display()
    );
    Ok(summary)
}

fn same_location(root: &Path, destination: &Path) -> bool {
    match (fs::canonicalize(root), fs::canonicalize(destination)) {
        (Ok(root), Ok(destination)) => root == destination,
        _ => false,
    }
}
