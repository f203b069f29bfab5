#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` decides which files of a package tree are published. It reads
//! the manifest, walks the tree, picks and compiles each directory's ignore
//! file, assembles the per-directory rule lists and evaluates every walked
//! file against them.
//!
//! # Design
//!
//! - [`Manifest`] holds the `package.json` fields that matter for selection:
//!   `files`, `main`, `bundleDependencies`, plus `name` and `version` for
//!   callers that publish.
//! - [`FilterSetBuilder`] turns a manifest and the compiled ignore files into
//!   a [`filters::ScopeTable`].
//! - [`select_files`] drives the walk, consults the [`SelectOptions`] ignore
//!   policy for each directory and collects the kept paths into a sorted
//!   [`SelectionResult`]. With the `parallel` feature enabled, evaluation
//!   fans out over the rayon pool.
//!
//! # Invariants
//!
//! - Version-control folders are never traversed. `node_modules` is not
//!   traversed unless the manifest bundles dependencies.
//! - Only non-directory entries are candidates. Results are relative to the
//!   package root and sorted.
//! - Ignore files are read in full before any file is evaluated.
//!
//! # Errors
//!
//! [`SelectError`] covers traversal failures, unreadable ignore files and
//! invalid patterns. [`ManifestError`] covers an unreadable or malformed
//! manifest and missing publish identity.
//!
//! # See also
//!
//! - [`filters`] for the rule model and the deferral semantics.
//! - [`walk`] for the traversal order.

mod builder;
mod error;
mod manifest;
mod select;

pub use builder::FilterSetBuilder;
pub use error::{ManifestError, SelectError};
pub use manifest::{MANIFEST_FILE, Manifest};
pub use select::{SelectOptions, SelectionResult, select_files, select_package};
