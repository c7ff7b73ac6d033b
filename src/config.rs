//! Calibration constants
//!
//! The crab-angle multiplier, the docking margin threshold and the power-to-thrust
//! ratios all varied between dashboard revisions. They live here as one immutable
//! set handed to the [`Calculator`](crate::calculator::Calculator); the defaults
//! are the current revision's values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid calibration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    /// Crab-angle multiplier (0.10 to 0.15 across revisions)
    pub drift_constant: f64,

    /// Docking margin below which an extra tug is recommended (T)
    pub docking_margin_threshold_t: f64,

    /// Engine load at which the advisory turns to WARNING (%)
    pub engine_load_warning_pct: f64,

    /// Engine load at which the advisory turns to CRITICAL (%)
    pub engine_load_critical_pct: f64,

    /// Tunnel thruster thrust per 100 kW (T)
    pub thruster_t_per_100kw: f64,

    /// Main propulsion thrust per 100 kW (T)
    pub engine_t_per_100kw: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            drift_constant: 0.15,
            docking_margin_threshold_t: 10.0,
            engine_load_warning_pct: 80.0,
            engine_load_critical_pct: 100.0,
            thruster_t_per_100kw: 1.2,
            engine_t_per_100kw: 1.3,
        }
    }
}

impl Calibration {
    /// Parse a calibration from TOML; missing keys take their defaults
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let calibration: Calibration = toml::from_str(s)?;
        calibration.validate()?;
        Ok(calibration)
    }

    /// Load a calibration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let calibration = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?calibration, "loaded calibration");
        Ok(calibration)
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("drift_constant", self.drift_constant),
            ("thruster_t_per_100kw", self.thruster_t_per_100kw),
            ("engine_t_per_100kw", self.engine_t_per_100kw),
            ("engine_load_warning_pct", self.engine_load_warning_pct),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if !(self.docking_margin_threshold_t >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "docking_margin_threshold_t must not be negative, got {}",
                self.docking_margin_threshold_t
            )));
        }

        for (name, value) in [
            ("engine_load_warning_pct", self.engine_load_warning_pct),
            ("engine_load_critical_pct", self.engine_load_critical_pct),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!("{name} must be a finite percentage, got {value}")));
            }
        }

        if self.engine_load_critical_pct < self.engine_load_warning_pct {
            return Err(ConfigError::Invalid(format!(
                "engine_load_critical_pct ({}) is below engine_load_warning_pct ({})",
                self.engine_load_critical_pct, self.engine_load_warning_pct
            )));
        }

        Ok(())
    }
}
