//! Configuration file support for nac-tco.
//!
//! Provides YAML-based configuration through `nac-tco.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::application::dto::OutputFormat;
use crate::shared::security::read_checked;
use crate::shared::Result;
use crate::tco_analysis::domain::{LooseNumber, RawAnalysisInput};

pub const CONFIG_FILENAME: &str = "nac-tco.config.yml";

/// Top-level configuration file schema.
///
/// Numeric fields accept numbers or strings; both are sanitized later
/// exactly like command-line values.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub devices: Option<LooseNumber>,
    pub locations: Option<LooseNumber>,
    pub years: Option<LooseNumber>,
    pub company_size: Option<String>,
    pub industry: Option<String>,
    pub fte_cost: Option<LooseNumber>,
    pub breach_cost: Option<LooseNumber>,
    pub portnox_price: Option<LooseNumber>,
    pub vendors: Option<Vec<String>>,
    pub baseline: Option<String>,
    pub format: Option<String>,
    /// Catalog file, relative paths resolved against the working directory
    pub catalog: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Analysis inputs carried by this file
    pub fn analysis_input(&self) -> RawAnalysisInput {
        RawAnalysisInput {
            device_count: self.devices.clone(),
            location_count: self.locations.clone(),
            analysis_period: self.years.clone(),
            company_size: self.company_size.clone(),
            industry: self.industry.clone(),
            fte_cost: self.fte_cost.clone(),
            breach_cost: self.breach_cost.clone(),
            portnox_pricing: self.portnox_price.clone(),
            vendors: self.vendors.clone(),
            baseline: self.baseline.clone(),
        }
    }

    /// Output format, validated when the file was loaded
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    debug!(path = %path.display(), "Loaded config file");

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

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref vendors) = config.vendors {
        for (i, vendor) in vendors.iter().enumerate() {
            if vendor.trim().is_empty() {
                bail!(
                    "Invalid config: vendors[{}] must not be empty.\n\n\
                     💡 Hint: Each vendors entry must be a catalog id (e.g., \"cisco\").",
                    i
                );
            }
        }
    }

    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "Unknown config field will be ignored");
    }
}
