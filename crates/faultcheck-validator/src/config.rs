use faultcheck_types::headers::QUORUM_ACKED_LSN;
use faultcheck_types::resources::RESOURCE_TOKEN_NOT_FOUND;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration shared by every validator a builder produces.
///
/// Values are captured at registration time, so changing the config of a
/// builder only affects checks registered afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Response header carrying the quorum-acknowledged LSN.
    pub quorum_acked_lsn_header: String,
    /// Exact message of the "resource token not found" failure.
    pub resource_token_not_found_message: String,
    /// Emit a `tracing` debug event for every evaluated check.
    pub trace_checks: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            quorum_acked_lsn_header: QUORUM_ACKED_LSN.to_string(),
            resource_token_not_found_message: RESOURCE_TOKEN_NOT_FOUND.to_string(),
            trace_checks: true,
        }
    }
}

impl ValidatorConfig {
    /// Parse a config from TOML. Missing keys take their default values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.quorum_acked_lsn_header.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "quorum_acked_lsn_header must not be empty".into(),
            ));
        }
        Ok(config)
    }
}
