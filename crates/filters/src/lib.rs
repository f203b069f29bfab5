#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` implements the rule machinery that decides which files of a
//! package tree are published. Rules come from three places: the rules the
//! engine derives from the manifest, the built-in policy tables in
//! [`defaults`], and per-directory ignore files compiled by
//! [`IgnoreFile::compile`]. Rules are grouped per directory into a
//! [`ScopeTable`], and every candidate path is evaluated against the scope of
//! its nearest ancestor directory.
//!
//! # Design
//!
//! - [`Rule`] captures a glob pattern and whether a match keeps or drops the
//!   path. The rule itself is lightweight; glob compilation happens when a
//!   [`ScopeTableBuilder`] is built.
//! - [`ScopeTableBuilder`] collects rule lists per directory. Ignore-file
//!   rules are inserted at the front of their directory's list.
//! - [`ScopeTable`] owns the compiled representation of every scope and
//!   answers [`ScopeTable::resolve`] and [`ScopeTable::decide`] queries. It is
//!   immutable and cheap to clone, so evaluation can fan out across threads.
//! - [`IgnorePolicy`] picks the governing ignore file of a directory;
//!   [`PriorityPolicy`] is the default `.yarnignore` > `.npmignore` >
//!   `.gitignore` ordering.
//!
//! # Invariants
//!
//! - Matching is case-insensitive, `*` never crosses `/`, and dotfiles match
//!   ordinary wildcards.
//! - The root scope always exists and is the terminal fallback of every
//!   lookup. Lookups only move toward the root.
//! - Within a scope the last matching rule decides. In a nested scope the
//!   first rule that misses hands the whole evaluation to the nearest scope
//!   above it.
//!
//! # Errors
//!
//! [`ScopeTableBuilder::build`] reports [`PatternError`] when a rule pattern
//! is not a valid glob. The error carries the offending pattern and the
//! underlying [`globset::Error`].
//!
//! # Examples
//!
//! Exclude a test directory through a root ignore file placed after the broad
//! include rules:
//!
//! ```
//! use filters::{IgnoreFile, Rule, ScopeTableBuilder};
//! use std::path::Path;
//!
//! let ignore = IgnoreFile::compile("test/\n", "");
//! let rules = [Rule::include("*"), Rule::include("*/**")]
//!     .into_iter()
//!     .chain(ignore.into_rules());
//! let table = ScopeTableBuilder::new(rules).build().expect("rules compile");
//!
//! assert!(table.allows(Path::new("index.js")));
//! assert!(table.allows(Path::new("lib/util.js")));
//! assert!(!table.allows(Path::new("test/index.js")));
//! ```
//!
//! # See also
//!
//! - `engine::select_files` builds a [`ScopeTable`] from a package tree and
//!   evaluates every walked file against it.
//! - [`globset`] for the glob matching primitives used internally.

mod compiled;
mod decision;
pub mod defaults;
mod error;
mod ignore_file;
mod policy;
mod rule;
mod scope;

pub use decision::Decision;
pub use defaults::default_ignore_patterns;
pub use error::PatternError;
pub use ignore_file::{IgnoreFile, parse_line};
pub use policy::{IgnorePolicy, PriorityPolicy};
pub use rule::Rule;
pub use scope::{FilterScope, ScopeTable, ScopeTableBuilder};
