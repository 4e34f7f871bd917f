//! Settings file for jvqdump
//!
//! ```toml
//! [extract]
//! skip_failed_records = true
//!
//! [export]
//! format = "json"
//! output_dir = "out"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jvq::{ExtractConfig, OutputFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "jvqdump.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    pub format: OutputFormat,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extract: ExtractConfig,
    pub export: ExportSettings,
}

impl Config {
    /// Load an explicit settings file, or `jvqdump.toml` if it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Extraction settings with command line switches applied on top
    pub fn extract_config(&self, no_verify: bool, lenient: bool) -> ExtractConfig {
        ExtractConfig::builder()
            .memoize_scans(self.extract.memoize_scans)
            .skip_failed_records(self.extract.skip_failed_records || lenient)
            .verify_checksum(self.extract.verify_checksum && !no_verify)
            .build()
    }
}
