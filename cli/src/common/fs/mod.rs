//! # DoxPack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module acts as the primary interface and organizational unit for
//! filesystem-related utility functions within the DoxPack CLI. It aggregates
//! functionality from specialized submodules, providing a consistent entry
//! point for file I/O and asset staging.
//!
//! ## Architecture
//!
//! Functionality is delegated to the following submodules:
//!
//! - **`copy`**: The non-recursive asset copy, staging the immediate regular
//!   files of a source directory into a destination directory. Used by
//!   `doxpack generate`.
//! - **`io`**: Basic input/output operations, reading files to strings and
//!   writing strings to files, with error context. Used by the template
//!   filler and config loading.
//!
//! Callers import from the specific submodule,
//! e.g. `crate::common::fs::io::read_file_to_string`.
//!

/// Contains the non-recursive file copy used for asset staging (`copy_dir_files`).
pub mod copy;
/// Contains basic file I/O operations (`read_file_to_string`, `write_string_to_file`).
pub mod io;
