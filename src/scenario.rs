//! Scenario files: the pilot's inputs written down as TOML
//!
//! Dimensional values carry their unit (`{ value = 330, unit = "m" }`); forces
//! are plain tonnes. A `ship_type` fills in Cb, Cp and air draft unless the file
//! overrides them.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::advisory::DockingOperation;
use crate::calculator::{DockingConditions, ManeuverInputs};
use crate::config::Calibration;
use crate::environment::*;
use crate::types::*;
use crate::vessel::{ShipType, VesselProfile};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unit conversion error: {0}")]
    Unit(#[from] UnitError),

    #[error("Missing vessel data: {0} (give it explicitly or set ship_type)")]
    MissingHullData(&'static str),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub vessel: VesselSection,
    pub environment: EnvironmentSection,
    pub target: TargetSection,
    pub transit_tugs: TugSection,
    pub docking: DockingSection,

    /// Optional calibration overrides
    pub calibration: Option<Calibration>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VesselSection {
    pub ship_type: Option<ShipType>,
    pub lpp: LengthValue,
    pub draft: LengthValue,
    pub air_draft: Option<LengthValue>,
    pub block_coefficient: Option<f64>,
    pub porosity_coefficient: Option<f64>,
    pub engine_power: PowerValue,
    pub bow_thruster_power: PowerValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentSection {
    pub mean_wind: VelocityValue,
    #[serde(default = "default_gust_factor")]
    pub gust_factor: f64,
    pub wind_sector: WindSector,
    pub current_speed: VelocityValue,
    pub current_direction: CurrentDirection,
}

fn default_gust_factor() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct TargetSection {
    pub surface_speed: VelocityValue,
    pub tolerated_drift: AngleValue,
    pub safety_margin: Option<VelocityValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TugSection {
    pub bollard_pull_t: f64,
    pub tug_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DockingSection {
    pub wind_speed: VelocityValue,
    pub operation: DockingOperation,
    pub bollard_pull_t: f64,
    pub tug_count: u32,
}

impl Scenario {
    pub fn from_toml_str(s: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let scenario = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), "loaded scenario");
        Ok(scenario)
    }

    /// Resolve units and presets into calculator inputs
    ///
    /// Domain checks are left to the calculator.
    pub fn to_inputs(&self) -> Result<ManeuverInputs, ScenarioError> {
        Ok(ManeuverInputs {
            vessel: self.vessel.to_profile()?,
            environment: EnvironmentConditions::new(
                self.environment.mean_wind.to_velocity()?,
                self.environment.gust_factor,
                self.environment.wind_sector,
                self.environment.current_speed.to_velocity()?,
                self.environment.current_direction,
            ),
            target: ManeuverTarget::new(
                self.target.surface_speed.to_velocity()?,
                self.target.tolerated_drift.to_angle()?,
                match &self.target.safety_margin {
                    Some(margin) => margin.to_velocity()?,
                    None => Velocity::new::<knot>(0.0),
                },
            ),
            transit_tugs: TugAssistConfig::from_tonnes(
                self.transit_tugs.bollard_pull_t,
                self.transit_tugs.tug_count,
            ),
            docking: DockingConditions {
                wind_speed: self.docking.wind_speed.to_velocity()?,
                tugs: TugAssistConfig::from_tonnes(self.docking.bollard_pull_t, self.docking.tug_count),
                operation: self.docking.operation,
            },
        })
    }
}

impl VesselSection {
    pub fn to_profile(&self) -> Result<VesselProfile, ScenarioError> {
        let defaults = self.ship_type.map(|t| t.defaults());

        let air_draft = match (&self.air_draft, defaults) {
            (Some(value), _) => value.to_length()?,
            (None, Some(d)) => d.air_draft,
            (None, None) => return Err(ScenarioError::MissingHullData("air_draft")),
        };
        let block_coefficient = self
            .block_coefficient
            .or(defaults.map(|d| d.block_coefficient))
            .ok_or(ScenarioError::MissingHullData("block_coefficient"))?;
        let porosity_coefficient = self
            .porosity_coefficient
            .or(defaults.map(|d| d.porosity_coefficient))
            .ok_or(ScenarioError::MissingHullData("porosity_coefficient"))?;

        Ok(VesselProfile::new(
            self.lpp.to_length()?,
            air_draft,
            self.draft.to_length()?,
            block_coefficient,
            porosity_coefficient,
            self.engine_power.to_power()?,
            self.bow_thruster_power.to_power()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const HARBOUR_APPROACH: &str = r#"
[vessel]
ship_type = "LargeContainer"
lpp = { value = 330, unit = "m" }
draft = { value = 12.5, unit = "m" }
engine_power = { value = 45000, unit = "kW" }
bow_thruster_power = { value = 2500, unit = "kW" }

[environment]
mean_wind = { value = 20, unit = "kn" }
gust_factor = 1.3
wind_sector = "Beam"
current_speed = { value = 1, unit = "kn" }
current_direction = "Following"

[target]
surface_speed = { value = 3.5, unit = "kn" }
tolerated_drift = { value = 7, unit = "deg" }

[transit_tugs]
bollard_pull_t = 60
tug_count = 2

[docking]
wind_speed = { value = 15, unit = "kn" }
operation = "Unberthing"
bollard_pull_t = 60
tug_count = 1
"#;

    #[test]
    fn test_preset_fills_hull_data() {
        let inputs = Scenario::from_toml_str(HARBOUR_APPROACH)
            .unwrap()
            .to_inputs()
            .unwrap();

        assert_eq!(inputs.vessel.block_coefficient, 0.70);
        assert_eq!(inputs.vessel.porosity_coefficient, 0.85);
        assert_relative_eq!(inputs.vessel.air_draft.get::<meter>(), 55.0, epsilon = 1e-9);
        assert_relative_eq!(inputs.environment.effective_wind().get::<knot>(), 26.0, epsilon = 1e-9);
        assert_eq!(inputs.docking.operation, DockingOperation::Unberthing);
        assert_eq!(inputs.target.safety_margin.get::<knot>(), 0.0);
    }

    #[test]
    fn test_explicit_values_override_preset() {
        let text = HARBOUR_APPROACH.replace(
            "ship_type = \"LargeContainer\"",
            "ship_type = \"LargeContainer\"\nblock_coefficient = 0.66\nair_draft = { value = 150, unit = \"ft\" }",
        );
        let vessel = Scenario::from_toml_str(&text).unwrap().vessel.to_profile().unwrap();

        assert_eq!(vessel.block_coefficient, 0.66);
        assert_relative_eq!(vessel.air_draft.get::<meter>(), 45.72, epsilon = 1e-9);
    }

    #[test]
    fn test_missing_hull_data_without_preset() {
        let text = HARBOUR_APPROACH.replace("ship_type = \"LargeContainer\"", "");
        let err = Scenario::from_toml_str(&text).unwrap().to_inputs().unwrap_err();
        assert!(matches!(err, ScenarioError::MissingHullData("air_draft")));
    }

    #[test]
    fn test_bad_unit_reported() {
        let text = HARBOUR_APPROACH.replace("unit = \"kW\"", "unit = \"donkeys\"");
        let err = Scenario::from_toml_str(&text).unwrap().to_inputs().unwrap_err();
        assert!(matches!(err, ScenarioError::Unit(UnitError::UnknownPowerUnit(_))));
    }

    #[test]
    fn test_calibration_section() {
        let text = format!("{HARBOUR_APPROACH}\n[calibration]\ndrift_constant = 0.12\n");
        let scenario = Scenario::from_toml_str(&text).unwrap();
        let cal = scenario.calibration.unwrap();
        assert_eq!(cal.drift_constant, 0.12);
        assert_eq!(cal.docking_margin_threshold_t, 10.0);
    }
}
