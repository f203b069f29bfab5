//! Shared infrastructure for the binary-level integration tests.

pub mod helpers;
