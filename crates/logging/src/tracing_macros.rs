//! crates/logging/src/tracing_macros.rs
//! Convenience macros for packlist-specific tracing.
//!
//! These macros provide ergonomic wrappers around standard tracing macros
//! with appropriate targets for packlist subsystems. Callers must depend on
//! `tracing` directly.

/// Emit a filter rule trace.
///
/// # Example
/// ```ignore
/// trace_filter!("compiled {} rules for {}", count, dir);
/// ```
#[macro_export]
macro_rules! trace_filter {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "packlist::filter", $($arg)*);
    };
}

/// Emit a per-file verdict trace.
///
/// Verdicts are emitted once per candidate, so they sit at `trace` level
/// under the filter target.
///
/// # Example
/// ```ignore
/// trace_verdict!("{} -> {}", path, keep);
/// ```
#[macro_export]
macro_rules! trace_verdict {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "packlist::filter", $($arg)*);
    };
}

/// Emit a directory traversal trace.
///
/// # Example
/// ```ignore
/// trace_walk!("pruning {}", dir);
/// ```
#[macro_export]
macro_rules! trace_walk {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "packlist::walk", $($arg)*);
    };
}

/// Emit a selection engine trace.
///
/// # Example
/// ```ignore
/// trace_select!("kept {} of {} files", kept, total);
/// ```
#[macro_export]
macro_rules! trace_select {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "packlist::select", $($arg)*);
    };
}

/// Emit a tarball construction trace.
///
/// # Example
/// ```ignore
/// trace_pack!("wrote {}", filename);
/// ```
#[macro_export]
macro_rules! trace_pack {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "packlist::pack", $($arg)*);
    };
}
