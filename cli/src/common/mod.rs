//! # DoxPack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for shared
//! utility modules used throughout the DoxPack CLI application. It keeps
//! cross-cutting concerns (filesystem operations, external process execution)
//! separate from command-specific logic (`commands::`) and core
//! infrastructure (`core::`).
//!
//! ## Architecture
//!
//! - **`fs`**: Foundational filesystem operations: file I/O with error
//!   context and the non-recursive asset copy. Includes `io` and `copy`.
//! - **`process`**: Runs external tools (Doxygen) as child processes with a
//!   working directory and maps failures into the standard error types.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{fs, process};
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # fn run_example() -> Result<()> {
//! let staged = fs::copy::copy_dir_files(Path::new("assets"), Path::new("docs/pkg"))?;
//! process::run_tool(Path::new("doxygen"), Path::new("docs/pkg"), &["Doxyfile"])?;
//! # Ok(())
//! # }
//! ```
//!

/// Utilities for filesystem operations (copying, I/O).
pub mod fs;
/// Utilities for executing and managing external processes.
pub mod process;
