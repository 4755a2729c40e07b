//! # DoxPack Template Filler
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! This module implements the Doxyfile template filling used by the `generate`
//! command. It reads a text template, substitutes the two recognized
//! placeholder tokens with caller-supplied values, and writes the result as
//! `Doxyfile` into the package output directory.
//!
//! ## Architecture
//!
//! Substitution is deliberately not a template engine. The Doxyfile format is
//! opaque to DoxPack; the fill is a literal, non-recursive, case-sensitive
//! replacement of two fixed tokens:
//! - `${PackageName}`: the name of the package being documented
//! - `${Version}`: the package version string
//!
//! Any other `${...}` text in the template passes through byte-for-byte
//! unchanged. Replacement values are never rescanned for tokens.
//!
//! The output is a single plain write that overwrites any existing `Doxyfile`.
//! Parent directories are not created here; a missing output directory
//! surfaces as an I/O error. A crash mid-write may leave a truncated file;
//! no atomic-rename guarantee is made.
//!
//! ## Examples
//!
//! ```rust
//! let written = templating::fill_template(
//!     Path::new("Doxyfile.template"),
//!     "widgets",
//!     "1.2.3",
//!     Path::new("docs/widgets"),
//! )?;
//! assert!(written.ends_with("Doxyfile"));
//! ```
//!
use crate::common::fs::io; // Read/write helpers with error context
use crate::core::error::Result; // Use the standard Result type
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Placeholder token replaced with the package name.
pub const PACKAGE_NAME_TOKEN: &str = "${PackageName}";
/// Placeholder token replaced with the package version.
pub const VERSION_TOKEN: &str = "${Version}";
/// Name of the configuration file written into the output directory and
/// passed to Doxygen.
pub const DOXYFILE_NAME: &str = "Doxyfile";

/// Fills a Doxyfile template and writes the result to `output_dir/Doxyfile`.
///
/// Reads the entire template, replaces every occurrence of
/// [`PACKAGE_NAME_TOKEN`] and [`VERSION_TOKEN`] with the supplied values
/// (order-independent between the two), and overwrites any existing
/// `Doxyfile` at the destination.
///
/// # Arguments
///
/// * `template_path` - Path to the readable text template.
/// * `package_name` - Replacement value for `${PackageName}`.
/// * `package_version` - Replacement value for `${Version}`.
/// * `output_dir` - Existing directory to write `Doxyfile` into.
///
/// # Returns
///
/// * `Result<PathBuf>` - The path of the written `Doxyfile`.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The template file does not exist or cannot be read. Nothing is written
///   in this case.
/// - The output directory does not exist or is not writable.
pub fn fill_template(
    template_path: &Path,
    package_name: &str,
    package_version: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    debug!(
        "Filling template '{}' (name='{}', version='{}')",
        template_path.display(),
        package_name,
        package_version
    );

    let template_contents = io::read_file_to_string(template_path)?;

    let filled = template_contents
        .replace(PACKAGE_NAME_TOKEN, package_name)
        .replace(VERSION_TOKEN, package_version);

    let output_path = output_dir.join(DOXYFILE_NAME);
    io::write_string_to_file(&output_path, &filled)?;

    info!(
        "Filled template '{}' into '{}'",
        template_path.display(),
        output_path.display()
    );
    Ok(output_path)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_fill_replaces_both_tokens() -> Result<()> {
        let dir = tempdir()?;
        let template = dir.path().join("Doxyfile.template");
        fs::write(&template, "Name=${PackageName}\nVer=${Version}\n")?;

        let written = fill_template(&template, "Widgets", "1.2.3", dir.path())?;
        assert_eq!(written, dir.path().join("Doxyfile"));
        assert_eq!(fs::read_to_string(written)?, "Name=Widgets\nVer=1.2.3\n");
        Ok(())
    }

    #[test]
    fn test_fill_replaces_every_occurrence() -> Result<()> {
        let dir = tempdir()?;
        let template = dir.path().join("t");
        fs::write(
            &template,
            "${PackageName} ${PackageName}\n${Version}${Version}${Version}",
        )?;

        fill_template(&template, "x", "9", dir.path())?;
        let out = fs::read_to_string(dir.path().join("Doxyfile"))?;
        assert_eq!(out, "x x\n999");
        Ok(())
    }

    #[test]
    fn test_fill_passes_unknown_tokens_through() -> Result<()> {
        let dir = tempdir()?;
        let template = dir.path().join("t");
        fs::write(&template, "A=${PackageName} B=${OutputDir} C=${version}")?;

        // Unrecognized tokens (including wrong-case ones) are untouched.
        fill_template(&template, "pkg", "1.0", dir.path())?;
        let out = fs::read_to_string(dir.path().join("Doxyfile"))?;
        assert_eq!(out, "A=pkg B=${OutputDir} C=${version}");
        Ok(())
    }

    #[test]
    fn test_fill_is_not_recursive() -> Result<()> {
        let dir = tempdir()?;
        let template = dir.path().join("t");
        fs::write(&template, "N=${PackageName}")?;

        // A replacement value containing the version token is not rescanned.
        fill_template(&template, "${Version}", "1.0", dir.path())?;
        let out = fs::read_to_string(dir.path().join("Doxyfile"))?;
        assert_eq!(out, "N=${Version}");
        Ok(())
    }

    #[test]
    fn test_fill_token_free_template_is_byte_identical() -> Result<()> {
        let dir = tempdir()?;
        let template = dir.path().join("t");
        let content = "PROJECT_LOGO = logo.png\nGENERATE_HTML = YES\n";
        fs::write(&template, content)?;

        fill_template(&template, "pkg", "1.0", dir.path())?;
        assert_eq!(fs::read_to_string(dir.path().join("Doxyfile"))?, content);
        Ok(())
    }

    #[test]
    fn test_fill_is_idempotent_and_overwrites() -> Result<()> {
        let dir = tempdir()?;
        let template = dir.path().join("t");
        fs::write(&template, "Name=${PackageName}\n")?;

        fill_template(&template, "first", "1", dir.path())?;
        let first = fs::read_to_string(dir.path().join("Doxyfile"))?;
        fill_template(&template, "first", "1", dir.path())?;
        let second = fs::read_to_string(dir.path().join("Doxyfile"))?;
        assert_eq!(first, second);

        // A second run with different inputs overwrites rather than appends.
        fill_template(&template, "other", "2", dir.path())?;
        assert_eq!(
            fs::read_to_string(dir.path().join("Doxyfile"))?,
            "Name=other\n"
        );
        Ok(())
    }

    #[test]
    fn test_fill_missing_template_writes_nothing() {
        let dir = tempdir().unwrap();
        let result = fill_template(
            &dir.path().join("nonexistent.template"),
            "pkg",
            "1.0",
            dir.path(),
        );
        assert!(result.is_err());
        assert!(!dir.path().join("Doxyfile").exists());
    }

    #[test]
    fn test_fill_missing_output_dir_errors() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("t");
        fs::write(&template, "x").unwrap();

        // Parent directories are not created implicitly.
        let result = fill_template(&template, "pkg", "1.0", &dir.path().join("no/such/dir"));
        assert!(result.is_err());
    }
}
