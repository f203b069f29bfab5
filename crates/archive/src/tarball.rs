use std::fs::{self, File, Metadata};
use std::io::Write;
use std::path::{Path, PathBuf};

use engine::SelectionResult;
use flate2::Compression;
use flate2::write::GzEncoder;
use tar::{Builder, EntryType, Header, HeaderMode};

use crate::error::ArchiveError;
use crate::naming::entry_name;

/// Mode recorded for entries with any execute bit set.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Mode recorded for every other entry.
pub const REGULAR_MODE: u32 = 0o644;

/// Counts reported after a tarball has been written.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TarballSummary {
    /// Files appended to the archive.
    pub entries: usize,
    /// Selected paths that did not resolve to a regular file.
    pub skipped: usize,
    /// Total uncompressed size of the appended files.
    pub bytes: u64,
}

/// Streams a gzip-compressed tar of every selected file into `writer`.
///
/// Entries are written in the selection's sorted order under
/// `package/<relative path>` with owner ids and mtime zeroed. Selected paths
/// that resolve to something other than a regular file (a symlink to a
/// directory, say) are skipped.
///
/// Returns the writer once the gzip stream is finished.
///
/// # Errors
///
/// Returns [`ArchiveError::Read`] when a selected file cannot be opened,
/// [`ArchiveError::Append`] when the writer rejects an entry and
/// [`ArchiveError::Finish`] when the trailer cannot be flushed.
pub fn write_tarball<W: Write>(
    root: &Path,
    selection: &SelectionResult,
    writer: W,
) -> Result<(W, TarballSummary), ArchiveError> {
    write_entries(root, selection.iter(), writer)
}

/// Writes the tarball for `selection` to `destination`.
///
/// The archive is staged in a temporary file next to `destination` and
/// renamed into place once complete, so an existing archive at that path is
/// only replaced by a finished one. When `destination` lies inside `root`
/// it is never packed into itself, even if the selection lists it.
///
/// # Errors
///
/// Returns [`ArchiveError::Create`] when the staging file cannot be created,
/// [`ArchiveError::Persist`] when it cannot be renamed to `destination`, or
/// any error from [`write_tarball`].
pub fn create_tarball(
    root: &Path,
    selection: &SelectionResult,
    destination: &Path,
) -> Result<TarballSummary, ArchiveError> {
    let own_entry = path_below(root, destination);
    if let Some(relative) = own_entry.as_deref().filter(|path| selection.contains(path)) {
        logging::trace_pack!("leaving previous {} out of the archive", relative.display());
    }

    let staging_dir = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = tempfile::Builder::new()
        .prefix(".packlist-")
        .suffix(".tgz.partial")
        .tempfile_in(staging_dir)
        .map_err(|source| ArchiveError::Create {
            path: PathBuf::from(destination),
            source,
        })?;

    let entries = selection
        .iter()
        .filter(|path| own_entry.as_deref() != Some(*path));
    let (file, summary) = write_entries(root, entries, staged.as_file_mut())?;
    file.sync_all().map_err(ArchiveError::Finish)?;
    publish_mode(staged.as_file()).map_err(ArchiveError::Finish)?;

    staged
        .persist(destination)
        .map_err(|error| ArchiveError::Persist {
            path: PathBuf::from(destination),
            source: error.error,
        })?;
    logging::trace_pack!(
        "wrote {} entries to {}",
        summary.entries,
        destination.display()
    );
    Ok(summary)
}

fn write_entries<'a, I, W>(
    root: &Path,
    paths: I,
    writer: W,
) -> Result<(W, TarballSummary), ArchiveError>
where
    I: IntoIterator<Item = &'a Path>,
    W: Write,
{
    let encoder = GzEncoder::new(writer, Compression::default());
    let mut builder = Builder::new(encoder);
    builder.mode(HeaderMode::Deterministic);

    let mut summary = TarballSummary::default();
    for relative in paths {
        let source = root.join(relative);
        let metadata = fs::metadata(&source).map_err(|error| ArchiveError::read(&source, error))?;
        if !metadata.is_file() {
            logging::trace_pack!("skipping {}: not a regular file", relative.display());
            summary.skipped += 1;
            continue;
        }

        let name = entry_name(relative);
        append_file_entry(&mut builder, &name, &source, &metadata)?;
        logging::trace_pack!("added {name} ({} bytes)", metadata.len());
        summary.entries += 1;
        summary.bytes += metadata.len();
    }

    let encoder = builder.into_inner().map_err(ArchiveError::Finish)?;
    let writer = encoder.finish().map_err(ArchiveError::Finish)?;
    Ok((writer, summary))
}

/// Location of `path` relative to `root`, when it lies below it.
///
/// Both sides are made absolute without resolving symlinks.
pub(crate) fn path_below(root: &Path, path: &Path) -> Option<PathBuf> {
    let root = std::path::absolute(root).ok()?;
    let path = std::path::absolute(path).ok()?;
    path.strip_prefix(&root)
        .ok()
        .filter(|relative| !relative.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Staging files are created private; the published archive is not.
#[cfg(unix)]
fn publish_mode(file: &File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    file.set_permissions(fs::Permissions::from_mode(REGULAR_MODE))
}

#[cfg(not(unix))]
fn publish_mode(_file: &File) -> std::io::Result<()> {
    Ok(())
}

fn append_file_entry<W: Write>(
    builder: &mut Builder<W>,
    name: &str,
    source: &Path,
    metadata: &Metadata,
) -> Result<(), ArchiveError> {
    let mut file = File::open(source).map_err(|error| ArchiveError::read(source, error))?;

    let mut header = Header::new_gnu();
    header.set_entry_type(EntryType::Regular);
    header.set_mode(entry_mode(metadata));
    header.set_uid(0);
    header.set_gid(0);
    header.set_mtime(0);
    header.set_size(metadata.len());
    builder
        .append_data(&mut header, name, &mut file)
        .map_err(|source| ArchiveError::Append {
            name: name.to_owned(),
            source,
        })
}

#[cfg(unix)]
fn entry_mode(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    if metadata.permissions().mode() & 0o111 != 0 {
        EXECUTABLE_MODE
    } else {
        REGULAR_MODE
    }
}

#[cfg(not(unix))]
fn entry_mode(_metadata: &Metadata) -> u32 {
    REGULAR_MODE
}
