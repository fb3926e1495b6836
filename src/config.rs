//! Configuration file support for bundle-dismantle.
//!
//! Provides YAML-based configuration through `bundle-dismantle.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::OutputFormat;
use crate::shared::error::DismantleError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bundle-dismantle.config.yml";

/// Top-level configuration file schema.
///
/// Every key is optional; command-line arguments take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub order_sheet: Option<String>,
    pub master_sheet: Option<String>,
    pub format: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub reject_empty: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null, which means "no settings"
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist; otherwise the working directory is searched
/// and a missing file means "no settings".
pub fn resolve_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            Ok(discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

/// The configured output format, if any.
///
/// # Errors
/// `InvalidConfig` if the value is not a known format
pub fn config_format(config: &ConfigFile) -> Result<Option<OutputFormat>> {
    config
        .format
        .as_deref()
        .map(str::parse::<OutputFormat>)
        .transpose()
        .map_err(|e| DismantleError::invalid_config(e).into())
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config_format(config)?;

    for (key, value) in [
        ("order_sheet", &config.order_sheet),
        ("master_sheet", &config.master_sheet),
    ] {
        if matches!(value, Some(name) if name.trim().is_empty()) {
            return Err(DismantleError::invalid_config(format!(
                "{} must not be empty.\n\n\
                 💡 Hint: Remove the key to use the first sheet of the workbook.",
                key
            ))
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
