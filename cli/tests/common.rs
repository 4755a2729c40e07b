//! # DoxPack CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the integration
//! test files. Integration tests live in `cli/tests/` and each `.rs` file in
//! that directory (that isn't a module like this one) is compiled as a
//! separate test crate linked against the `doxpack` binary crate.
//!

// Allow potentially unused code in this common module, as different test files
// might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// # Get DoxPack Command (`doxpack_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to
/// the compiled `doxpack` binary target for the current test run.
///
/// ## Panics
/// Panics if the `doxpack` binary cannot be found via `Command::cargo_bin`.
pub fn doxpack_cmd() -> Command {
    Command::cargo_bin("doxpack").expect("Failed to find doxpack binary for testing")
}
