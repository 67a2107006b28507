use physics::ChainConfig;
use serde::{Deserialize, Serialize};

use crate::error::EnvError;

/// Full description of a [`crate::ChainCartPole`] environment.
///
/// Missing fields fall back to the classic constants, so `{}` is a valid
/// config and `{"physics": {"link_masses": [0.1, 0.1]}}` only changes the
/// chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub physics: ChainConfig,
    /// Cart position beyond which the episode fails (meters)
    pub x_threshold: f64,
    /// Link 1 tilt beyond which the episode fails (radians)
    pub theta_threshold_radians: f64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            physics: ChainConfig::default(),
            x_threshold: 2.4,
            theta_threshold_radians: 12.0 * 2.0 * std::f64::consts::PI / 360.0,
        }
    }
}

impl EnvConfig {
    /// Parses a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Config`] if the document is malformed. Physical
    /// validity is only checked when the environment is built.
    pub fn from_json(json: &str) -> Result<Self, EnvError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Only fails if serialization itself fails, which plain numbers never do.
    pub fn to_json_pretty(&self) -> Result<String, EnvError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
