use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a [`PreviewConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid preview config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-run settings for the preview engine.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Maximum evaluation steps for one interpreter run.
    pub gas_limit: u64,
    /// Maximum number of output entries for one interpreter run.
    pub max_output_entries: usize,
    /// Element id of the output panel in generated documents.
    pub panel_id: String,
    /// `<title>` of generated documents.
    pub title: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            gas_limit: 10_000,
            max_output_entries: 1_000,
            panel_id: "preview-output".to_string(),
            title: "Preview".to_string(),
        }
    }
}

impl PreviewConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn with_max_output_entries(mut self, max: usize) -> Self {
        self.max_output_entries = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = PreviewConfig::from_json(r#"{"gas_limit": 5}"#).unwrap();
        assert_eq!(cfg.gas_limit, 5);
        assert_eq!(cfg.panel_id, "preview-output");
        assert_eq!(cfg.max_output_entries, 1_000);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(PreviewConfig::from_json("{}").unwrap(), PreviewConfig::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = PreviewConfig::from_json("{gas").unwrap_err();
        assert!(err.to_string().starts_with("invalid preview config"));
    }
}
