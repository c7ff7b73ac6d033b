//! Drift sensitivity, critical speed and crab angle
//!
//! The drift coefficient combines hull fullness with the windage-to-wetted area
//! ratio:
//!
//! kb = 0.1 * (Cb + 0.5 * T / Lpp) * sqrt(Aw / Sw) * C_sector
//!
//! Below the critical speed Vc = Veff * sqrt(kb / drift_tolerated) the hull no
//! longer develops enough lateral resistance to hold the tolerated drift angle.

use serde::{Deserialize, Serialize};

use crate::environment::EnvironmentConditions;
use crate::error::{Result, ensure_positive};
use crate::types::*;
use crate::vessel::VesselProfile;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriftModel {
    /// Drift sensitivity coefficient kb
    pub kb: f64,

    /// Minimum speed through the water that holds the tolerated drift unaided
    pub critical_speed: Velocity,
}

pub fn drift_coefficient(vessel: &VesselProfile, environment: &EnvironmentConditions) -> Result<f64> {
    vessel.validate()?;

    let lpp = vessel.lpp.get::<meter>();
    let draft = vessel.draft.get::<meter>();
    let form = vessel.block_coefficient + 0.5 * draft / lpp;
    let area_ratio = (vessel.windage_area_m2() / vessel.wetted_area_m2()).sqrt();

    Ok(0.1 * form * area_ratio * environment.sector_coefficient())
}

/// Drift coefficient and critical speed for a tolerated drift angle
pub fn compute_drift_model(
    vessel: &VesselProfile,
    environment: &EnvironmentConditions,
    tolerated_drift: Angle,
) -> Result<DriftModel> {
    let drift_deg = tolerated_drift.get::<degree>();
    ensure_positive("tolerated drift angle (°)", drift_deg)?;
    environment.validate()?;

    let kb = drift_coefficient(vessel, environment)?;
    let v_eff = environment.effective_wind().get::<knot>();
    let critical_kn = v_eff * (kb / drift_deg).sqrt();

    Ok(DriftModel {
        kb,
        critical_speed: Velocity::new::<knot>(critical_kn),
    })
}

/// Heading correction into the wind to make good the intended track
///
/// crab = atan(Veff * drift_constant * C_sector / Vs)
pub fn compute_crab_angle(
    environment: &EnvironmentConditions,
    surface_speed: Velocity,
    drift_constant: f64,
) -> Result<Angle> {
    let vs = surface_speed.get::<knot>();
    ensure_positive("surface speed (kn)", vs)?;
    environment.validate()?;

    let v_eff = environment.effective_wind().get::<knot>();
    let ratio = v_eff * drift_constant * environment.sector_coefficient() / vs;

    Ok(Angle::new::<radian>(ratio.atan()))
}
