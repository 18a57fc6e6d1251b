mod observability_config;
mod retrieval_config;

pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{CanopyResult, ConfigError};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanopyConfig {
    pub retrieval: RetrievalConfig,
    pub observability: ObservabilityConfig,
}

impl CanopyConfig {
    /// Parse from a TOML string. Missing sections and fields use defaults.
    pub fn from_toml(toml_str: &str) -> CanopyResult<Self> {
        let config = toml::from_str(toml_str).map_err(|e| ConfigError::InvalidToml {
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> CanopyResult<String> {
        let toml_str = toml::to_string(self).map_err(|e| ConfigError::InvalidToml {
            reason: e.to_string(),
        })?;
        Ok(toml_str)
    }
}
