//! Lateral wind force on the hull in transit
//!
//! F = 0.5 * ρ_air * Veff² * Aw * C_sector / 9806  (tonnes-force)

use crate::environment::EnvironmentConditions;
use crate::types::*;
use crate::vessel::VesselProfile;

/// Wind force on the windage for the current sector and gusting wind
pub fn compute_wind_force(vessel: &VesselProfile, environment: &EnvironmentConditions) -> Force {
    let tonnes = wind_pressure_tonnes(
        environment.effective_wind(),
        vessel.windage_area_m2(),
        environment.sector_coefficient(),
    );
    force_from_tonnes(tonnes)
}

/// Share of the main engine's thrust taken up by the wind force (%)
///
/// A ship with no propulsion facing any wind at all is infinitely loaded.
pub fn compute_engine_load_percent(wind_force: Force, engine_thrust: Force) -> f64 {
    let wind_t = to_tonnes(wind_force);
    let engine_t = to_tonnes(engine_thrust);

    if engine_t > 0.0 {
        wind_t / engine_t * 100.0
    } else if wind_t > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}
