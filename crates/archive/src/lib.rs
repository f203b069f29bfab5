#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `archive` turns a [`engine::SelectionResult`] into a gzip-compressed tar
//! stream. Every selected file is stored under `package/` so the archive
//! unpacks into a single directory. [`copy_selection`] is the uncompressed
//! counterpart: it mirrors the selected files into a directory.
//!
//! # Invariants
//!
//! - Entries appear in the selection's sorted order.
//! - Headers carry uid/gid `0` and mtime `0`; modes are normalised to
//!   [`EXECUTABLE_MODE`] or [`REGULAR_MODE`]. Two runs over the same tree
//!   produce byte-identical archives.
//! - [`create_tarball`] never packs its own destination and only replaces
//!   an existing file at that path with a finished archive.
//!
//! # Examples
//!
//! ```
//! use archive::write_tarball;
//! use engine::SelectionResult;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let root = std::env::temp_dir();
//! let selection = SelectionResult::default();
//! let (bytes, summary) = write_tarball(&root, &selection, Vec::new())?;
//! assert_eq!(summary.entries, 0);
//! assert!(!bytes.is_empty());
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod copy;
mod error;
mod naming;
mod tarball;

pub use copy::{CopySummary, copy_selection};
pub use error::{ArchiveError, CopyError};
pub use naming::{ENTRY_PREFIX, entry_name, tarball_file_name};
pub use tarball::{
    EXECUTABLE_MODE, REGULAR_MODE, TarballSummary, create_tarball, write_tarball,
};
