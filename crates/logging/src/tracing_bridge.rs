//! crates/logging/src/tracing_bridge.rs
//! Bridge between [`VerbosityConfig`] and a `tracing-subscriber` registry.
//!
//! The configuration is rendered as `EnvFilter` directives so standard
//! `tracing` macros honour the per-subsystem levels. Setting
//! [`LOG_ENV_VAR`] replaces the rendered directives entirely.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! init_tracing(&config)?;
//!
//! logging::trace_select!("selection started");
//! ```

use std::env;
use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::TryInitError;

use super::config::VerbosityConfig;

/// Environment variable that overrides the computed filter directives.
pub const LOG_ENV_VAR: &str = "PACKLIST_LOG";

/// Builds the [`EnvFilter`] used by [`init_tracing`].
///
/// A non-empty, parseable [`LOG_ENV_VAR`] wins over the configuration.
#[must_use]
pub fn env_filter(config: &VerbosityConfig) -> EnvFilter {
    env::var(LOG_ENV_VAR)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(config.filter_directives()))
}

/// Installs a global formatting subscriber that writes to stderr.
///
/// Returns an error when a global subscriber is already installed.
pub fn init_tracing(config: &VerbosityConfig) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init()
}
