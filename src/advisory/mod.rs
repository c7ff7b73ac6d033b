//! Advisory policy
//!
//! Every computed quantity that matters for the go/no-go decision is mapped to
//! OK / WARNING / CRITICAL with a message carrying the relevant numbers.

pub mod classify;
pub mod tactics;

pub use classify::*;
pub use tactics::*;

use crate::config::Calibration;
use crate::environment::{ManeuverTarget, TugAssistConfig};
use crate::physics::DockingBalance;
use crate::types::*;

/// Transit: can the attending tugs supply the lateral force the hull cannot?
pub fn transit_tug_advisory(required: Force, tugs: &TugAssistConfig) -> Advisory {
    let required_t = to_tonnes(required);
    let available_t = to_tonnes(tugs.total_bollard_pull());

    if required_t > available_t {
        Advisory::critical(
            "Transit towage",
            format!(
                "{:.0} T short of thrust to counter the drift ({:.0} T required, {:.0} T available)",
                required_t - available_t,
                required_t,
                available_t
            ),
        )
    } else if required_t > 0.0 {
        Advisory::warning(
            "Transit towage",
            format!("Tug assistance needed: {:.0} T required", required_t),
        )
    } else {
        Advisory::ok(
            "Transit towage",
            "Ship self-sufficient: surface speed is enough to counter the windage",
        )
    }
}

/// Transit: is the ship at or above the speed that holds the tolerated drift?
///
/// Equality counts as holding.
pub fn critical_speed_advisory(critical_speed: Velocity, surface_speed: Velocity) -> Advisory {
    let vc = critical_speed.get::<knot>();
    let vs = surface_speed.get::<knot>();

    if vs < vc {
        Advisory::critical(
            "Critical speed",
            format!(
                "Surface speed {:.2} kn is below the critical speed {:.2} kn: drift cannot be held unaided",
                vs, vc
            ),
        )
    } else {
        Advisory::ok(
            "Critical speed",
            format!("Surface speed {:.2} kn holds the drift (critical {:.2} kn)", vs, vc),
        )
    }
}

/// Transit: speed kept in hand above the critical speed against the pilot's margin
pub fn speed_margin_advisory(critical_speed: Velocity, target: &ManeuverTarget) -> Advisory {
    let reserve = target.surface_speed.get::<knot>() - critical_speed.get::<knot>();
    let desired = target.safety_margin.get::<knot>();
    let thresholds = Thresholds::lower_is_worse("Speed margin", " kn", desired, 0.0);

    let message = match thresholds.severity(reserve) {
        Severity::Critical => format!("{:.2} kn below the critical speed", -reserve),
        Severity::Warning => format!(
            "{:.2} kn in hand, less than the desired {:.2} kn",
            reserve, desired
        ),
        Severity::Ok => format!("{:.2} kn in hand (desired {:.2} kn)", reserve, desired),
    };

    Advisory::new(thresholds.label, thresholds.severity(reserve), message)
}

/// Alongside: does thruster plus tugs beat the static wind pressure?
pub fn docking_advisory(balance: &DockingBalance, calibration: &Calibration) -> Advisory {
    let margin_t = balance.margin_tonnes();
    let threshold_t = calibration.docking_margin_threshold_t;
    let thresholds = Thresholds::lower_is_worse("Docking margin", " T", threshold_t, 0.0);

    let message = match thresholds.severity(margin_t) {
        Severity::Critical => format!(
            "Critical deficiency: wind pressure exceeds available thrust by {:.0} T",
            -margin_t
        ),
        Severity::Warning => format!(
            "Marginal: only {:.0} T in hand (below {:.0} T), order an additional tug",
            margin_t, threshold_t
        ),
        Severity::Ok => format!("Adequate: {:.0} T in hand", margin_t),
    };

    Advisory::new(thresholds.label, thresholds.severity(margin_t), message)
}

/// Transit: how much of the main engine's thrust the wind is eating
pub fn engine_load_advisory(load_percent: f64, calibration: &Calibration) -> Advisory {
    let thresholds = Thresholds::higher_is_worse(
        "Engine load",
        "%",
        calibration.engine_load_warning_pct,
        calibration.engine_load_critical_pct,
    );
    classify(load_percent, &thresholds)
}
