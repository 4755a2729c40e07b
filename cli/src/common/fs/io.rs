//! # DoxPack Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the fundamental filesystem input/output operations
//! required by DoxPack: reading entire files into strings and writing string
//! content back to files. Both are thin wrappers around `std::fs` that attach
//! contextual information to errors via `anyhow::Context`.
//!
//! ## Architecture
//!
//! - **`read_file_to_string`**: wrapper around `fs::read_to_string` with
//!   context on failure.
//! - **`write_string_to_file`**: wrapper around `fs::write` with context on
//!   failure. Overwrites an existing file. It does NOT create parent
//!   directories: the packaging pipeline requires the output directory to
//!   exist already, and a missing directory must surface as an I/O error
//!   rather than being papered over.
//!
use crate::core::error::Result; // Use standard Result type
use anyhow::Context; // For adding context to errors
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be found, opened, or read, with
/// context indicating which file failed.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// The parent directory must already exist; this function makes no
/// directory-creation guarantee. The write is a single plain `fs::write`
/// call with no atomic-rename step.
///
/// # Errors
///
/// Returns an `Err` if writing fails (missing parent directory, permissions,
/// I/O error), with context indicating which file failed.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    debug!("Wrote content to file: {:?}", path);
    Ok(())
}
