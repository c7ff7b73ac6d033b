use crate::environment::CurrentDirection;
use crate::types::*;

/// Speed over ground from speed through the water and the current
///
/// An opposing current stronger than the ship returns a negative SOG: the ship
/// is being set astern. Display policy is left to the caller.
pub fn compute_sog(
    surface_speed: Velocity,
    current_speed: Velocity,
    direction: CurrentDirection,
) -> Velocity {
    let vs = surface_speed.get::<knot>();
    let vc = current_speed.get::<knot>();

    let sog = match direction {
        CurrentDirection::Following => vs + vc,
        CurrentDirection::Opposing => vs - vc,
        CurrentDirection::Crossing => {
            // Ship along X, current perpendicular along Y
            let track = na::Vector2::new(vs, 0.0) + na::Vector2::new(0.0, vc);
            track.norm()
        }
    };

    Velocity::new::<knot>(sog)
}
