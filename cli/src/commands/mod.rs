//! # DoxPack Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands that comprise the DoxPack
//! CLI. It serves as the central point for importing and re-exporting command
//! modules to make them accessible to the main application entry point
//! (`main.rs`).
//!
//! ## Commands
//!
//! - `generate`: fill the Doxyfile template, stage assets, and run Doxygen
//!
//! Each command defines its own arguments structure and handler function to
//! process those arguments and implement the command's functionality.
//!

/// The documentation packaging pipeline: template fill, asset staging, Doxygen run.
pub mod generate;
