//! Static force balance alongside the berth
//!
//! With the ship stopped there is no relief from forward motion, so the full
//! beam windage is used (sector coefficient 1.0). The counter force is the bow
//! thruster plus every tug's bollard pull.

use serde::{Deserialize, Serialize};

use crate::config::Calibration;
use crate::environment::TugAssistConfig;
use crate::types::*;
use crate::vessel::VesselProfile;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DockingBalance {
    /// Wind pressure on the full lateral windage
    pub static_force: Force,

    /// Bow thruster thrust equivalent
    pub thruster_force: Force,

    /// Total bollard pull of the attending tugs
    pub tug_force: Force,

    /// Thruster plus tugs
    pub counter_force: Force,

    /// Counter force minus wind force; negative means the wind wins
    pub margin: Force,
}

impl DockingBalance {
    pub fn margin_tonnes(&self) -> f64 {
        to_tonnes(self.margin)
    }

    pub fn is_deficient(&self) -> bool {
        self.margin_tonnes() < 0.0
    }
}

pub fn compute_docking_balance(
    vessel: &VesselProfile,
    wind_speed: Velocity,
    tugs: &TugAssistConfig,
    calibration: &Calibration,
) -> DockingBalance {
    let static_t = wind_pressure_tonnes(wind_speed, vessel.windage_area_m2(), 1.0);
    let thruster_t = to_tonnes(vessel.thruster_thrust(calibration));
    let tug_t = to_tonnes(tugs.total_bollard_pull());
    let counter_t = thruster_t + tug_t;

    DockingBalance {
        static_force: force_from_tonnes(static_t),
        thruster_force: force_from_tonnes(thruster_t),
        tug_force: force_from_tonnes(tug_t),
        counter_force: force_from_tonnes(counter_t),
        margin: force_from_tonnes(counter_t - static_t),
    }
}
