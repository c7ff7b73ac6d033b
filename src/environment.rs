use serde::{Deserialize, Serialize};

use crate::error::{Result, ensure_non_negative, ensure_positive, ensure_within};
use crate::types::*;

/// Relative wind sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindSector {
    /// Wind on the beam, full lateral exposure
    Beam,
    /// Wind forward of the beam
    Bow,
    /// Wind abaft the beam
    Stern,
}

impl WindSector {
    /// Attack-angle coefficient applied to the lateral windage
    pub fn coefficient(&self) -> f64 {
        match self {
            WindSector::Beam => 1.0,
            WindSector::Bow => 0.6,
            WindSector::Stern => 0.4,
        }
    }
}

/// Current direction relative to the ship's heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurrentDirection {
    Following,
    Opposing,
    Crossing,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConditions {
    /// Mean wind speed
    pub mean_wind: WindSpeed,

    /// Gust factor applied to the mean wind (>= 1.0)
    pub gust_factor: f64,

    pub wind_sector: WindSector,

    pub current_speed: Velocity,

    pub current_direction: CurrentDirection,
}

impl EnvironmentConditions {
    pub fn new(
        mean_wind: Velocity,
        gust_factor: f64,
        wind_sector: WindSector,
        current_speed: Velocity,
        current_direction: CurrentDirection,
    ) -> Self {
        Self {
            mean_wind,
            gust_factor,
            wind_sector,
            current_speed,
            current_direction,
        }
    }

    /// Calm water, no wind
    pub fn calm() -> Self {
        Self::new(
            Velocity::new::<knot>(0.0),
            1.0,
            WindSector::Beam,
            Velocity::new::<knot>(0.0),
            CurrentDirection::Following,
        )
    }

    /// Effective wind Veff = mean wind * gust factor
    pub fn effective_wind(&self) -> Velocity {
        Velocity::new::<knot>(self.mean_wind.get::<knot>() * self.gust_factor)
    }

    pub fn sector_coefficient(&self) -> f64 {
        self.wind_sector.coefficient()
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("mean wind (kn)", self.mean_wind.get::<knot>())?;
        ensure_within("gust factor", self.gust_factor, 1.0, f64::MAX)?;
        ensure_non_negative("current speed (kn)", self.current_speed.get::<knot>())?;
        Ok(())
    }
}

/// What the pilot wants to achieve in transit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManeuverTarget {
    /// Speed through the water
    pub surface_speed: Speed,

    /// Largest drift angle the pilot will accept
    pub tolerated_drift: DriftAngle,

    /// Speed to keep above the critical speed
    pub safety_margin: Velocity,
}

impl ManeuverTarget {
    pub fn new(surface_speed: Velocity, tolerated_drift: Angle, safety_margin: Velocity) -> Self {
        Self {
            surface_speed,
            tolerated_drift,
            safety_margin,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("surface speed (kn)", self.surface_speed.get::<knot>())?;
        ensure_positive("tolerated drift angle (°)", self.tolerated_drift.get::<degree>())?;
        ensure_non_negative("safety margin (kn)", self.safety_margin.get::<knot>())?;
        Ok(())
    }
}

/// Tugs standing by for the maneuver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TugAssistConfig {
    /// Bollard pull of each tug
    pub bollard_pull: BollardPull,

    pub tug_count: u32,
}

impl TugAssistConfig {
    pub fn new(bollard_pull: Force, tug_count: u32) -> Self {
        Self {
            bollard_pull,
            tug_count,
        }
    }

    /// Build from the bollard pull per tug in tonnes
    pub fn from_tonnes(bollard_pull_t: f64, tug_count: u32) -> Self {
        Self::new(force_from_tonnes(bollard_pull_t), tug_count)
    }

    pub fn total_bollard_pull(&self) -> Force {
        force_from_tonnes(to_tonnes(self.bollard_pull) * self.tug_count as f64)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("bollard pull (T)", to_tonnes(self.bollard_pull))
    }
}
