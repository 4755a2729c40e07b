//! # DoxPack Generate Command
//!
//! File: cli/src/commands/generate.rs
//!
//! ## Overview
//!
//! This module implements the `doxpack generate` command, the documentation
//! packaging pipeline. It handles:
//! - Parsing command-line arguments for the packaging run
//! - Resolving effective settings from flags and configuration
//! - Filling the Doxyfile template into the package output directory
//! - Staging static asset files next to the filled Doxyfile
//! - Running Doxygen against the package directory
//!
//! ## Architecture
//!
//! The pipeline is strictly sequential (fill, then copy, then generate)
//! and each stage is terminal on first failure. Nothing written by an
//! earlier stage is rolled back when a later stage fails.
//!
//! 1. Load configuration and resolve each setting (flag > config > default)
//! 2. Join the package name onto the output base to get the package directory
//! 3. Fill the template into `<package dir>/Doxyfile`
//! 4. Copy the immediate files of the assets directory into the package directory
//! 5. Invoke Doxygen with the package directory as its working directory and
//!    `Doxyfile` as its sole argument
//!
//! The package directory is expected to exist already; a missing directory
//! surfaces as an I/O error from the fill stage.
//!
//! ## Examples
//!
//! Basic usage:
//!
//! ```bash
//! # Package docs for widgets 1.2.3 using defaults for everything else
//! doxpack generate --package-name widgets --package-version 1.2.3
//!
//! # Explicit paths
//! doxpack generate -n widgets --package-version 1.2.3 \
//!     --template doc/Doxyfile.template --output build/docs \
//!     --assets doc/assets --doxygen /opt/doxygen/bin/doxygen
//! ```
//!
use crate::common::{fs, process}; // Asset copy and tool invocation
use crate::core::config::{self, DocsConfig}; // Layered configuration
use crate::core::error::Result; // Use the standard Result type for error handling
use crate::core::templating; // Doxyfile template filling
use anyhow::Context; // For adding context to errors
use clap::Parser; // For parsing command-line arguments
use std::path::PathBuf;
use tracing::{debug, info};

/// # Generate Command Arguments (`GenerateArgs`)
///
/// Defines the command-line arguments accepted by the `doxpack generate`
/// subcommand. Path-like flags are optional and fall back to the loaded
/// configuration, then to built-in defaults.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Name of the package being documented. Substituted for
    /// `${PackageName}` and joined onto the output base directory.
    #[arg(long, short = 'n')]
    package_name: String,

    /// Version of the package being documented. Substituted for `${Version}`.
    #[arg(long)]
    package_version: String,

    /// Optional: path to the Doxyfile template to fill.
    #[arg(long, short = 't')]
    template: Option<PathBuf>,

    /// Optional: base output directory. The package directory is
    /// `<output>/<package name>` and must already exist.
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Optional: directory whose immediate files are staged into the package
    /// directory.
    #[arg(long, short = 'a')]
    assets: Option<PathBuf>,

    /// Optional: Doxygen executable to run (bare names resolve via PATH).
    #[arg(long, env = "DOXPACK_DOXYGEN")]
    doxygen: Option<PathBuf>,
}

/// Effective settings for one packaging run, after flag/config/default
/// resolution.
#[derive(Debug)]
struct GenerateSettings {
    template_file: PathBuf,
    output_dir: PathBuf,
    assets_dir: PathBuf,
    doxygen_path: PathBuf,
}

/// # Handle Generate Command (`handle_generate`)
///
/// The main asynchronous handler function for `doxpack generate`.
/// Orchestrates the packaging pipeline:
/// 1. Loads configuration and resolves effective settings.
/// 2. Fills the Doxyfile template into the package directory.
/// 3. Stages asset files into the same directory.
/// 4. Runs Doxygen against that directory.
/// 5. Prints a completion summary.
///
/// ## Arguments
/// * `args` - The parsed `GenerateArgs` containing all command-line options.
///
/// ## Returns
/// * `Result<()>` - `Ok(())` on full pipeline success, or an `Err` from the
///   first failing stage.
pub async fn handle_generate(args: GenerateArgs) -> Result<()> {
    info!("Handling generate command...");
    info!(
        "Packaging documentation for '{}' version '{}'",
        args.package_name, args.package_version
    );

    let cfg = config::load_config().context("Failed to load DoxPack configuration")?;
    let settings = resolve_settings(&args, &cfg.docs);
    debug!("Resolved generate settings: {:?}", settings);

    // The package directory combines the output base with the package name.
    let package_dir = settings.output_dir.join(&args.package_name);
    debug!("Package output directory: {}", package_dir.display());

    print_stage("Filling template");
    let doxyfile_path = templating::fill_template(
        &settings.template_file,
        &args.package_name,
        &args.package_version,
        &package_dir,
    )
    .context("Template filling failed")?;

    print_stage("Copying assets");
    let copied = fs::copy::copy_dir_files(&settings.assets_dir, &package_dir)
        .context("Asset staging failed")?;

    print_stage("Running doxygen");
    process::run_tool(
        &settings.doxygen_path,
        &package_dir,
        &[templating::DOXYFILE_NAME],
    )
    .context("Documentation generation failed")?;

    println!(
        "✅ Packaged documentation for '{}' into '{}' ({} asset file(s) staged, config '{}').",
        args.package_name,
        package_dir.display(),
        copied,
        doxyfile_path.display()
    );
    Ok(())
}

/// Resolves each setting with the precedence: CLI flag > config > default.
/// (Config values already include the built-in defaults for unset keys.)
fn resolve_settings(args: &GenerateArgs, docs: &DocsConfig) -> GenerateSettings {
    GenerateSettings {
        template_file: args
            .template
            .clone()
            .unwrap_or_else(|| PathBuf::from(&docs.template_file)),
        output_dir: args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&docs.output_dir)),
        assets_dir: args
            .assets
            .clone()
            .unwrap_or_else(|| PathBuf::from(&docs.assets_dir)),
        doxygen_path: args
            .doxygen
            .clone()
            .unwrap_or_else(|| PathBuf::from(&docs.doxygen_path)),
    }
}

/// Prints a banner line marking the start of a pipeline stage.
fn print_stage(message: &str) {
    println!("===============");
    println!("{}", message);
    println!("===============");
}
