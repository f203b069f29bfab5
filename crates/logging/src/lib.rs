#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the verbosity model and `tracing` integration shared by
//! every crate in the packlist workspace. Subsystems emit standard `tracing`
//! events under fixed `packlist::*` targets through the macros exported here,
//! and the command-line front-end maps `-v` counts and `--debug` tokens onto a
//! [`VerbosityConfig`] that decides which of those targets are recorded.
//!
//! # Design
//!
//! - [`DebugFlag`] names a diagnostic category (`filter`, `walk`, `select`,
//!   `pack`) and the `tracing` target its events use.
//! - [`VerbosityConfig`] stores one level per flag and renders itself as
//!   `EnvFilter` directives. Level `1` records `info`, `2` adds `debug`, and
//!   anything higher records `trace`.
//! - With the `tracing` feature enabled, [`init_tracing`] installs a stderr
//!   subscriber driven by those directives, overridable through
//!   [`LOG_ENV_VAR`].
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityConfig;
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_debug_list("filter2").unwrap();
//!
//! let directives = config.filter_directives();
//! assert!(directives.contains("packlist::filter=debug"));
//! assert!(directives.contains("packlist::select=info"));
//! ```

mod config;
mod levels;
#[cfg(feature = "tracing")]
mod tracing_bridge;
mod tracing_macros;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{LOG_ENV_VAR, env_filter, init_tracing};
