//! Evaluator configuration
//!
//! An `EvaluatorConfig` can be written in TOML, YAML or JSON:
//!
//! ```toml
//! cutoff = 5
//! form = "exp"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::metrics::GainForm;

/// Default rank cutoff
pub const DEFAULT_CUTOFF: usize = 10;

/// Cutoff and gain form used to build an `NdcgScorer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Maximum rank position considered
    pub cutoff: usize,
    /// Gain transform
    pub form: GainForm,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            cutoff: DEFAULT_CUTOFF,
            form: GainForm::default(),
        }
    }
}

impl EvaluatorConfig {
    /// Check that the configuration can produce a meaningful score
    pub fn validate(&self) -> Result<()> {
        if self.cutoff == 0 {
            return Err(Error::DimensionMismatch(
                "cutoff must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse from a TOML string
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: EvaluatorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a YAML string
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: EvaluatorConfig = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a JSON string
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: EvaluatorConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, picking the format from its extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let content = fs::read_to_string(path)?;
        let config = match extension.as_str() {
            "toml" => Self::from_toml_str(&content)?,
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            "json" => Self::from_json_str(&content)?,
            other => {
                return Err(Error::InvalidArgument(format!(
                    "unsupported config file extension '{}' for {}: expected toml, yaml, yml or json",
                    other,
                    path.display()
                )))
            }
        };

        log::debug!(
            "loaded evaluator config from {}: cutoff={} form={}",
            path.display(),
            config.cutoff,
            config.form
        );
        Ok(config)
    }
}
