//! TOML configuration for a simulation run

use crate::math::Scalar;
use log::{info, warn};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct SimulationConfig {
    pub run: RunConfig,
    pub force_law: ForceLawConfig,
    pub comparison: ComparisonConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RunConfig {
    /// Number of integration steps per run
    pub steps: usize,
    /// Fixed per-step duration
    pub dt: Scalar,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 150,
            dt: 2500.0,
        }
    }
}

/// Which force law to install, in the same shape the factory consumes
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ForceLawConfig {
    #[serde(rename = "type")]
    pub tag: String,
    /// Law parameters, passed through to the builder's `data` object
    pub data: Option<toml::Value>,
}

impl Default for ForceLawConfig {
    fn default() -> Self {
        Self {
            tag: "nlug".to_string(),
            data: None,
        }
    }
}

impl ForceLawConfig {
    /// Declarative record for the force-law factory
    pub fn to_record(&self) -> Result<serde_json::Value, serde_json::Error> {
        let mut record = serde_json::json!({ "type": self.tag });
        if let Some(data) = &self.data {
            record["data"] = serde_json::to_value(data)?;
        }
        Ok(record)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Tolerance used when verifying against an expected trace
    pub epsilon: Scalar,
    /// Treat the tolerance as relative rather than absolute
    pub relative: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            epsilon: crate::control::comparator::DEFAULT_EPSILON,
            relative: false,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a file, falling back to defaults if the file doesn't exist
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse config file {path}: {e}. Using defaults.");
                    Self::default()
                }
            },
            Err(_) => {
                info!("Config file {path} not found. Using defaults.");
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
