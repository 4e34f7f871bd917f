//! Extraction settings.
//!
//! ```
//! use jvq::ExtractConfig;
//!
//! let config = ExtractConfig::builder()
//!     .skip_failed_records(true)
//!     .build();
//! assert!(config.memoize_scans);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for loading and batch extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Build a one-pass offset index for the sentinel and group pattern streams
    pub memoize_scans: bool,
    /// Skip records that fail to decode instead of aborting the batch
    pub skip_failed_records: bool,
    /// Reject images whose PRG checksum differs from the supported revision
    pub verify_checksum: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            memoize_scans: true,
            skip_failed_records: false,
            verify_checksum: true,
        }
    }
}

impl ExtractConfig {
    /// Create a new configuration builder
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::default()
    }
}

/// Builder for ExtractConfig
#[derive(Debug, Clone, Default)]
pub struct ExtractConfigBuilder {
    memoize_scans: Option<bool>,
    skip_failed_records: Option<bool>,
    verify_checksum: Option<bool>,
}

impl ExtractConfigBuilder {
    pub fn memoize_scans(mut self, enabled: bool) -> Self {
        self.memoize_scans = Some(enabled);
        self
    }

    pub fn skip_failed_records(mut self, enabled: bool) -> Self {
        self.skip_failed_records = Some(enabled);
        self
    }

    pub fn verify_checksum(mut self, enabled: bool) -> Self {
        self.verify_checksum = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ExtractConfig {
        let default = ExtractConfig::default();
        ExtractConfig {
            memoize_scans: self.memoize_scans.unwrap_or(default.memoize_scans),
            skip_failed_records: self
                .skip_failed_records
                .unwrap_or(default.skip_failed_records),
            verify_checksum: self.verify_checksum.unwrap_or(default.verify_checksum),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        assert_eq!(ExtractConfig::builder().build(), ExtractConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExtractConfig::builder()
            .memoize_scans(false)
            .verify_checksum(false)
            .build();
        assert!(!config.memoize_scans);
        assert!(!config.skip_failed_records);
        assert!(!config.verify_checksum);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ExtractConfig =
            serde_json::from_str(r#"{"skip_failed_records": true}"#).unwrap();
        assert!(config.memoize_scans);
        assert!(config.skip_failed_records);
        assert!(config.verify_checksum);
    }
}
