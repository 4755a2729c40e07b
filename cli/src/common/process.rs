//! # DoxPack Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! This module provides the wrapper around `std::process::Command` used to
//! run the external documentation generator. DoxPack is a pass-through
//! launcher: it starts the tool with a working directory and arguments,
//! inherits the parent's stdio so the tool's own output reaches the user,
//! and waits synchronously for completion.
//!
//! ## Architecture
//!
//! - **Working Directory Control:** the child runs with `current_dir` set to
//!   the package output directory so a bare `Doxyfile` argument resolves
//!   there.
//! - **Exit Code Handling:** a non-zero exit status maps to
//!   `DoxpackError::ExternalCommand`; a launch failure (executable missing,
//!   not executable) propagates the spawn error with context.
//! - **No supervision:** no retry, no timeout, no output capture. A hung
//!   tool hangs the pipeline.
//!
use crate::core::error::{DoxpackError, Result};
use anyhow::Context;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

/// Runs an external tool as a child process and waits for it to finish.
///
/// The child inherits stdio, so its output streams directly to the user's
/// terminal.
///
/// # Arguments
///
/// * `executable` - Path or bare name (resolved via PATH) of the tool.
/// * `working_dir` - Directory the child process runs in. Must exist.
/// * `args` - Arguments passed to the tool.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` if the tool exited with status zero.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The process cannot be started (executable not found, not executable).
/// - The tool exits with a non-zero status (`DoxpackError::ExternalCommand`).
pub fn run_tool(executable: &Path, working_dir: &Path, args: &[&str]) -> Result<()> {
    debug!(
        "Running '{}' with args {:?} in {:?}",
        executable.display(),
        args,
        working_dir
    );

    let status = Command::new(executable)
        .args(args)
        .current_dir(working_dir)
        .status()
        .with_context(|| {
            format!(
                "Failed to launch '{}' (is it installed and on PATH?)",
                executable.display()
            )
        })?;

    if !status.success() {
        anyhow::bail!(DoxpackError::ExternalCommand {
            cmd: format!("{} {}", executable.display(), args.join(" ")),
            status: status.to_string(),
        });
    }

    info!("'{}' completed successfully", executable.display());
    Ok(())
}
