//! Report configuration
//!
//! An optional TOML file controls which worksheets the report includes and
//! what they are named. Everything defaults to the full three-sheet report.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tokio::fs;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Worksheet names for the three report sheets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetNames {
    pub inputs: String,
    pub outputs: String,
    pub device_links: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            inputs: "Input".to_string(),
            outputs: "Output".to_string(),
            device_links: "Dev-to-Dev".to_string(),
        }
    }
}

/// Report-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Include the input patch worksheet
    pub include_inputs: bool,

    /// Include the output patch worksheet
    pub include_outputs: bool,

    /// Include the device-to-device worksheet
    pub include_device_links: bool,

    /// Worksheet names
    pub sheet_names: SheetNames,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_inputs: true,
            include_outputs: true,
            include_device_links: true,
            sheet_names: SheetNames::default(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub async fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).await?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// At least one worksheet must remain enabled
    pub fn validate(&self) -> Result<()> {
        if !self.include_inputs && !self.include_outputs && !self.include_device_links {
            return Err(ConfigError::Invalid(
                "all worksheets are disabled".to_string(),
            ));
        }
        Ok(())
    }
}
