//! # DoxPack Asset Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! This module provides the asset-staging copy used by `doxpack generate`:
//! the immediate regular files of a source directory are copied into a
//! destination directory, each under its original filename.
//!
//! ## Architecture
//!
//! The copy is deliberately flat. Subdirectories, symlinks to directories,
//! and other non-regular entries are silently skipped, never recursed into
//! and never an error. `std::fs::copy` does the per-file work, so contents
//! and permission bits travel with each file (ownership does not).
//!
//! Same-named files in the destination are overwritten. If an individual
//! copy fails, the error propagates immediately; files copied before the
//! failure stay on disk, there is no rollback.
//!
use crate::core::error::Result; // Use standard Result type from core::error
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Copies the immediate regular files of `source` into `destination`.
///
/// Each regular file directly inside `source` is copied to
/// `destination/<same filename>`, overwriting any existing file with that
/// name. Directories and other non-regular entries are skipped without
/// recursion.
///
/// # Arguments
///
/// * `source` - Directory whose immediate files are staged. Must exist.
/// * `destination` - Existing, writable directory to copy into.
///
/// # Returns
///
/// * `Result<usize>` - The number of files copied.
///
/// # Errors
///
/// Returns an `Err` if:
/// - `source` does not exist or cannot be listed.
/// - Copying any individual file fails (the partial copy set remains on disk).
pub fn copy_dir_files(source: &Path, destination: &Path) -> Result<usize> {
    let entries = fs::read_dir(source)
        .with_context(|| format!("Failed to list source directory {:?}", source))?;

    let mut copied = 0;
    for entry_result in entries {
        let entry = entry_result
            .with_context(|| format!("Failed to read entry in directory {:?}", source))?;
        let src_path = entry.path();

        // Only immediate regular files are staged; everything else is
        // skipped. `is_file` follows symlinks, so a link to a regular file
        // is copied while a link to a directory is not.
        if !src_path.is_file() {
            debug!("Skipping non-file entry: {:?}", src_path);
            continue;
        }

        let dest_path = destination.join(entry.file_name());
        fs::copy(&src_path, &dest_path)
            .with_context(|| format!("Failed to copy {:?} to {:?}", src_path, dest_path))?;
        debug!("Copied {:?} to {:?}", src_path, dest_path);
        copied += 1;
    }

    info!(
        "Copied {} file(s) from {:?} to {:?}",
        copied, source, destination
    );
    Ok(copied)
}
