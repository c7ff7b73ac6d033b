use uom::si::{
    f64::{Force, Power, Velocity},
    force::newton,
    power::kilowatt,
    velocity::knot,
};

/// Air density at sea level (kg/m³)
pub const AIR_DENSITY: f64 = 1.225;

/// Bridge rule-of-thumb knot to m/s factor used by every force formula
pub const MS_PER_KNOT: f64 = 0.514;

/// Newtons per metric tonne-force, as used on the dashboard
pub const NEWTONS_PER_TONNE: f64 = 9806.0;

/// Build a Force from metric tonnes-force
#[inline]
pub fn force_from_tonnes(tonnes: f64) -> Force {
    Force::new::<newton>(tonnes * NEWTONS_PER_TONNE)
}

/// Read a Force back in metric tonnes-force
#[inline]
pub fn to_tonnes(force: Force) -> f64 {
    force.get::<newton>() / NEWTONS_PER_TONNE
}

/// Knots to m/s with the bridge factor (not the exact 1852/3600)
#[inline]
pub fn knots_to_ms(speed: Velocity) -> f64 {
    speed.get::<knot>() * MS_PER_KNOT
}

/// Static thrust equivalent of installed power
///
/// `tonnes_per_100kw` is 1.2 for a tunnel thruster and 1.3 for main propulsion.
pub fn thrust_from_power(power: Power, tonnes_per_100kw: f64) -> Force {
    force_from_tonnes(power.get::<kilowatt>() / 100.0 * tonnes_per_100kw)
}

/// Dynamic wind pressure force in tonnes-force
///
/// F = 0.5 * ρ * v² * A * C / 9806, with v converted from knots.
pub fn wind_pressure_tonnes(speed: Velocity, area_m2: f64, coefficient: f64) -> f64 {
    let v_ms = knots_to_ms(speed);
    0.5 * AIR_DENSITY * v_ms.powi(2) * area_m2 * coefficient / NEWTONS_PER_TONNE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tonnes_round_trip() {
        assert_relative_eq!(to_tonnes(force_from_tonnes(42.5)), 42.5, epsilon = 1e-9);
    }

    #[test]
    fn test_thruster_ratio() {
        // 2500 kW tunnel thruster: 25 * 1.2 = 30 T
        let thrust = thrust_from_power(Power::new::<kilowatt>(2500.0), 1.2);
        assert_relative_eq!(to_tonnes(thrust), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_bridge_knot_factor() {
        let v = Velocity::new::<knot>(10.0);
        assert_relative_eq!(knots_to_ms(v), 5.14, epsilon = 1e-9);
    }
}
