//! # DoxPack Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the DoxPack application. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `DoxpackError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the domains the pipeline touches:
//! - Configuration errors
//! - Filesystem errors
//! - External tool (Doxygen) invocation errors
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !path.is_dir() {
//!     anyhow::bail!(DoxpackError::FileSystem(format!(
//!         "Assets path is not a directory: {}",
//!         path.display()
//!     )));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
//! All errors propagate up to `main`, which logs them and exits non-zero;
//! there is no local recovery or retry anywhere in the pipeline.
//!
use thiserror::Error;

/// Custom error type for the DoxPack application.
#[derive(Error, Debug)]
pub enum DoxpackError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("External command failed: {cmd}, Status: {status}")]
    ExternalCommand { cmd: String, status: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
