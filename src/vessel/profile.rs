use serde::{Deserialize, Serialize};

use crate::config::Calibration;
use crate::error::{Result, ensure_non_negative, ensure_positive, ensure_within};
use crate::types::*;

/// Hull and machinery particulars the pilot enters once per ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VesselProfile {
    /// Length between perpendiculars
    pub lpp: Length,

    /// Total air draft (height of the windage above the waterline)
    pub air_draft: Length,

    /// Current water draft
    pub draft: Length,

    /// Block coefficient Cb
    pub block_coefficient: f64,

    /// Porosity coefficient Cp (openings, lattice, stacked containers)
    pub porosity_coefficient: f64,

    /// Main engine power
    pub engine_power: Power,

    /// Bow thruster power
    pub bow_thruster_power: Power,
}

impl VesselProfile {
    pub fn new(
        lpp: Length,
        air_draft: Length,
        draft: Length,
        block_coefficient: f64,
        porosity_coefficient: f64,
        engine_power: Power,
        bow_thruster_power: Power,
    ) -> Self {
        Self {
            lpp,
            air_draft,
            draft,
            block_coefficient,
            porosity_coefficient,
            engine_power,
            bow_thruster_power,
        }
    }

    /// Reject geometry the drift and windage formulas cannot divide by
    pub fn validate(&self) -> Result<()> {
        ensure_positive("Lpp (m)", self.lpp.get::<meter>())?;
        ensure_positive("air draft (m)", self.air_draft.get::<meter>())?;
        ensure_positive("water draft (m)", self.draft.get::<meter>())?;
        ensure_positive("block coefficient", self.block_coefficient)?;
        ensure_within("porosity coefficient", self.porosity_coefficient, f64::MIN_POSITIVE, 1.0)?;
        ensure_non_negative("engine power (kW)", self.engine_power.get::<kilowatt>())?;
        ensure_non_negative("bow thruster power (kW)", self.bow_thruster_power.get::<kilowatt>())?;
        Ok(())
    }

    /// Effective lateral windage area Aw = Lpp * air draft * Cp (m²)
    pub fn windage_area_m2(&self) -> f64 {
        self.lpp.get::<meter>() * self.air_draft.get::<meter>() * self.porosity_coefficient
    }

    /// Effective lateral windage area as a quantity
    pub fn windage_area(&self) -> Area {
        Area::new::<square_meter>(self.windage_area_m2())
    }

    /// Wetted lateral area Sw = Lpp * draft (m²)
    pub fn wetted_area_m2(&self) -> f64 {
        self.lpp.get::<meter>() * self.draft.get::<meter>()
    }

    pub fn wetted_area(&self) -> Area {
        Area::new::<square_meter>(self.wetted_area_m2())
    }

    /// Static thrust of the bow thruster
    pub fn thruster_thrust(&self, calibration: &Calibration) -> Force {
        thrust_from_power(self.bow_thruster_power, calibration.thruster_t_per_100kw)
    }

    /// Static thrust of the main engine
    pub fn engine_thrust(&self, calibration: &Calibration) -> Force {
        thrust_from_power(self.engine_power, calibration.engine_t_per_100kw)
    }
}
