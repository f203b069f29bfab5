#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` enumerates the files of a package tree for the selection engine.
//! Ordering is kept stable across platforms by sorting directory entries
//! before yielding them, so two walks of the same tree always produce the
//! same sequence.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures traversal options: whether the root entry is
//!   emitted, whether directory symlinks are followed and which directory
//!   names are pruned.
//! - [`Walker`] implements [`Iterator`] and yields [`WalkEntry`] values in
//!   depth-first order. Directory contents are processed before the walker
//!   moves to the next sibling.
//! - [`WalkError`] pairs the failing step with the path being processed and
//!   the underlying I/O error.
//!
//! # Invariants
//!
//! - Relative paths never contain `..` segments and always lie below the
//!   root.
//! - Directories are entered at most once. When symlink following is enabled
//!   canonical paths are tracked to avoid cycles.
//! - A pruned directory is neither yielded nor entered, at any depth.
//!
//! # Errors
//!
//! Every failure is a [`WalkError`] whose [`WalkErrorKind`] names the step
//! that failed (inspecting the root, listing a directory, stat'ing a child or
//! resolving a directory's canonical path). The walker yields the error once
//! and then returns `None`. A dangling symlink is not an error: it is yielded
//! and never entered.
//!
//! # Examples
//!
//! Walk a package while skipping version-control metadata:
//!
//! ```
//! use walk::WalkBuilder;
//! use std::fs;
//! use std::path::PathBuf;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! fs::create_dir_all(temp.path().join(".git/objects"))?;
//! fs::create_dir_all(temp.path().join("lib"))?;
//! fs::write(temp.path().join("lib/index.js"), b"")?;
//!
//! let paths = WalkBuilder::new(temp.path())
//!     .include_root(false)
//!     .prune_names([".git"])
//!     .build()?
//!     .map(|entry| entry.map(walk::WalkEntry::into_relative_path))
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! assert_eq!(paths, [PathBuf::from("lib"), PathBuf::from("lib/index.js")]);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```
//!
//! # See also
//!
//! - `engine::select_files` consumes the walker to build the candidate list.

mod builder;
mod entry;
mod error;
mod walker;

pub use builder::WalkBuilder;
pub use entry::WalkEntry;
pub use error::{WalkError, WalkErrorKind};
pub use walker::Walker;

#[cfg(test)]
mod tests;
