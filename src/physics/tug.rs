//! Tug assistance needed to hold the tolerated drift in transit
//!
//! Below the critical speed the hull's lateral resistance falls off with the
//! square of speed, and the tugs make up the difference:
//!
//! F_tug = F_wind * (1 - (Vs / Vc)²), clamped at zero
//!
//! At or above the critical speed the ship is self-sufficient.

use crate::types::*;

/// Required tug force at a single operating point
pub fn compute_required_tug_force(
    wind_force: Force,
    critical_speed: Velocity,
    surface_speed: Velocity,
) -> Force {
    let vs = surface_speed.get::<knot>();
    let vc = critical_speed.get::<knot>();

    // Vs >= Vc also covers Vc == 0, so the division below never sees zero
    if vs >= vc {
        return force_from_tonnes(0.0);
    }

    let shortfall = 1.0 - (vs / vc).powi(2);
    force_from_tonnes((to_tonnes(wind_force) * shortfall).max(0.0))
}

/// Lazily evaluated force-vs-speed series
///
/// Cloning the curve restarts it from the first speed.
#[derive(Debug, Clone)]
pub struct TugForceCurve<I> {
    wind_force: Force,
    critical_speed: Velocity,
    speeds: I,
}

impl<I> Iterator for TugForceCurve<I>
where
    I: Iterator<Item = Velocity>,
{
    type Item = (Velocity, Force);

    fn next(&mut self) -> Option<Self::Item> {
        let speed = self.speeds.next()?;
        let force = compute_required_tug_force(self.wind_force, self.critical_speed, speed);
        Some((speed, force))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.speeds.size_hint()
    }
}

/// Sweep the required tug force across a sequence of surface speeds
pub fn sweep_tug_force_curve<S>(
    wind_force: Force,
    critical_speed: Velocity,
    speeds: S,
) -> TugForceCurve<S::IntoIter>
where
    S: IntoIterator<Item = Velocity>,
{
    TugForceCurve {
        wind_force,
        critical_speed,
        speeds: speeds.into_iter(),
    }
}
