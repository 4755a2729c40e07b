//! # DoxPack Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for DoxPack, handling
//! loading, merging, validation, and access to configuration data. It supports
//! a multi-level configuration approach that combines defaults, user settings,
//! and project-specific overrides.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Paths are validated and expanded (e.g., `~` to home directory)
//! - Configuration is validated for correctness before use
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.doxpack.toml` in current directory or ancestors
//! 2. User-specific `~/.config/doxpack/config.toml`
//! 3. Default values defined in the code
//!
//! CLI flags override all of the above; that final layer is applied by the
//! command handlers, not here.
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//!
//! // Access documentation packaging settings
//! let template = &cfg.docs.template_file;
//! let doxygen = &cfg.docs.doxygen_path;
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::core::error::{DoxpackError, Result}; // Use error from the same core module
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub docs: DocsConfig,
}

/// Configuration for documentation packaging (`doxpack generate`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// Path to the Doxyfile template to fill.
    #[serde(default = "default_template_file")]
    pub template_file: String,
    /// Base output directory; the package name is joined onto this (can use ~).
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Directory whose immediate files are staged next to the Doxyfile (can use ~).
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    /// Doxygen executable; a bare name is resolved via PATH.
    #[serde(default = "default_doxygen_path")]
    pub doxygen_path: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        DocsConfig {
            template_file: default_template_file(),
            output_dir: default_output_dir(),
            assets_dir: default_assets_dir(),
            doxygen_path: default_doxygen_path(),
        }
    }
}

fn default_template_file() -> String {
    "Doxyfile.template".to_string()
}
fn default_output_dir() -> String {
    "docs".to_string()
}
fn default_assets_dir() -> String {
    "assets".to_string()
}
fn default_doxygen_path() -> String {
    "doxygen".to_string() // Resolved through PATH by the OS
}

const PROJECT_CONFIG_FILENAME: &str = ".doxpack.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "DoxPack", "doxpack") {
        let config_dir = proj_dirs.config_dir();
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.doxpack.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.exists() && project_config.is_file() {
            return Ok(Some(project_config));
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project settings win over user settings, field by field. A project field
/// still at its built-in default is treated as unset.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.docs.template_file = if project_cfg.docs.template_file != default_template_file() {
        project_cfg.docs.template_file
    } else {
        user.docs.template_file
    };
    merged.docs.output_dir = if project_cfg.docs.output_dir != default_output_dir() {
        project_cfg.docs.output_dir
    } else {
        user.docs.output_dir
    };
    merged.docs.assets_dir = if project_cfg.docs.assets_dir != default_assets_dir() {
        project_cfg.docs.assets_dir
    } else {
        user.docs.assets_dir
    };
    merged.docs.doxygen_path = if project_cfg.docs.doxygen_path != default_doxygen_path() {
        project_cfg.docs.doxygen_path
    } else {
        user.docs.doxygen_path
    };
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    debug!("Expanding paths in configuration...");
    config.docs.template_file = shellexpand::tilde(&config.docs.template_file).into_owned();
    config.docs.output_dir = shellexpand::tilde(&config.docs.output_dir).into_owned();
    config.docs.assets_dir = shellexpand::tilde(&config.docs.assets_dir).into_owned();
    config.docs.doxygen_path = shellexpand::tilde(&config.docs.doxygen_path).into_owned();
    debug!("Expanded docs paths: {:?}", config.docs);
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    let assets_dir = PathBuf::from(&config.docs.assets_dir);
    if !assets_dir.exists() {
        // The copy stage errors later if the directory is still missing when
        // `generate` actually runs; at load time this is only advisory.
        warn!(
            "Configured assets directory '{}' does not exist.",
            assets_dir.display()
        );
    } else if !assets_dir.is_dir() {
        return Err(anyhow!(DoxpackError::Config(format!(
            "Configured assets path '{}' exists but is not a directory.",
            assets_dir.display()
        ))));
    }
    if config.docs.doxygen_path.is_empty() {
        return Err(anyhow!(DoxpackError::Config(
            "Doxygen path cannot be empty.".to_string()
        )));
    }
    info!("Configuration validation successful.");
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [docs]
            template_file = "doc/Doxyfile.template"
            output_dir = "~/site/api"
            doxygen_path = "/opt/doxygen/bin/doxygen"
        "#;

        let config: Config = toml::from_str(toml_content).expect("Failed to parse TOML");

        assert_eq!(config.docs.template_file, "doc/Doxyfile.template");
        assert_eq!(config.docs.output_dir, "~/site/api"); // Not yet expanded
        assert_eq!(config.docs.assets_dir, default_assets_dir()); // Default
        assert_eq!(config.docs.doxygen_path, "/opt/doxygen/bin/doxygen");
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let toml_content = r#"
            [docs]
            template_file = "Doxyfile.template"
            recursive_assets = true
        "#;
        let result: std::result::Result<Config, _> = toml::from_str(toml_content);
        assert!(result.is_err());
    }

    #[test]
    fn test_path_expansion() {
        let mut config = Config {
            docs: DocsConfig {
                output_dir: "~/site/api".to_string(),
                assets_dir: "/absolute/assets".to_string(),
                ..Default::default()
            },
        };

        expand_config_paths(&mut config).unwrap();

        let home_dir = dirs::home_dir().unwrap();
        assert_eq!(
            config.docs.output_dir,
            home_dir.join("site/api").to_string_lossy()
        );
        assert_eq!(config.docs.assets_dir, "/absolute/assets"); // Absolute path unchanged
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = Config {
            docs: DocsConfig {
                doxygen_path: "/usr/local/bin/doxygen".to_string(),
                output_dir: "user-docs".to_string(),
                ..Default::default()
            },
        };
        let project = Config {
            docs: DocsConfig {
                output_dir: "build/docs".to_string(),
                ..Default::default()
            },
        };

        let merged = merge_configs(user, Some(project));
        // Project set output_dir, so it wins; doxygen_path falls back to user.
        assert_eq!(merged.docs.output_dir, "build/docs");
        assert_eq!(merged.docs.doxygen_path, "/usr/local/bin/doxygen");
        assert_eq!(merged.docs.template_file, default_template_file());
    }

    #[test]
    fn test_validate_config_valid() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("assets")).unwrap();

        let config = Config {
            docs: DocsConfig {
                assets_dir: temp_dir
                    .path()
                    .join("assets")
                    .to_string_lossy()
                    .to_string(),
                ..Default::default()
            },
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_assets_path_is_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("not_a_dir");
        fs::write(&file_path, "").unwrap();

        let config = Config {
            docs: DocsConfig {
                assets_dir: file_path.to_string_lossy().to_string(),
                ..Default::default()
            },
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("is not a directory"));
    }

    #[test]
    fn test_validate_config_empty_doxygen_path() {
        let config = Config {
            docs: DocsConfig {
                doxygen_path: String::new(),
                ..Default::default()
            },
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Doxygen path cannot be empty"));
    }
}
