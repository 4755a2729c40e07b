//! # DoxPack Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for the DoxPack application. These components
//! handle configuration, error management, and template filling.
//!
//! ## Architecture
//!
//! The core infrastructure consists of three key components:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Doxyfile template filling (placeholder substitution)
//!
//! ## Usage
//!
//! Core infrastructure is imported by command handlers:
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{DoxpackError, Result}; // For error handling
//! use crate::core::templating; // For Doxyfile template filling
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
