//! Configuration for the Transformer

use crate::error::TransformError;
use serde::{Deserialize, Serialize};

/// Configuration for the raw-record entry points of the Transformer
///
/// Nothing here changes the content of a produced document; these settings
/// only decide which raw records are accepted for decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Maximum raw record size (bytes)
    pub max_record_bytes: usize,

    /// Reject records whose `$type` names a different collection
    ///
    /// Records without a `$type` key are always accepted.
    pub strict_record_type: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            max_record_bytes: 1024 * 1024,
            strict_record_type: true,
        }
    }
}

impl TransformConfig {
    /// Lenient preset: larger records, no `$type` check
    pub fn lenient() -> Self {
        Self {
            max_record_bytes: 8 * 1024 * 1024,
            strict_record_type: false,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.max_record_bytes == 0 {
            return Err(TransformError::Config(
                "max_record_bytes must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load and validate configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, TransformError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| TransformError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, TransformError> {
        toml::to_string_pretty(self)
            .map_err(|e| TransformError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
