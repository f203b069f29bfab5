#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `packlist` command. It parses the command line,
//! configures logging and selects the package's files through [`engine`].
//! The selection is printed (`--dry-run`), copied into a directory
//! (`--copy-to`) or written to a tarball, the last two through [`archive`].
//!
//! # Design
//!
//! [`run`] accepts an argument iterator together with handles for standard
//! output and error so the binary and the tests drive the same code path.
//! A [`clap`](https://docs.rs/clap/) builder performs the parse; help and
//! version output are rendered by the crate itself so the wording stays
//! stable.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Selected paths are printed one per line, sorted, with `/` separators.
//! - A tarball is only written when the manifest carries a name and a
//!   version.
//!
//! # Errors
//!
//! Usage errors (unknown options, conflicting modes, bad `--debug` tokens)
//! exit with [`EXIT_USAGE`]. Manifest, selection, archive, copy and output
//! failures exit with [`EXIT_FAILURE`]. Every diagnostic is a single
//! `packlist error:` line on stderr.
//!
//! # Examples
//!
//! ```
//! use cli::run;
//!
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = run(["packlist", "--version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("packlist "));
//! assert!(stderr.is_empty());
//! ```
//!
//! # See also
//!
//! - `src/bin/packlist.rs` for the binary that wires [`run`] into `main`.

mod arguments;
mod error;
mod frontend;

pub use error::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
pub use frontend::{exit_code_from, run};

/// Parsing entry points exposed for integration tests.
///
/// **Warning**: not part of the stable public API.
#[doc(hidden)]
pub mod test_utils {
    pub use crate::arguments::{ParsedArgs, parse_args};
}
