mod display;
mod explicit_unit_values;

pub use uom::si::f64::{Angle, Area, Force, Length, Power, Velocity};

pub use uom::si::{
    angle::{degree, radian},
    area::{square_foot, square_meter},
    force::{kilonewton, newton},
    length::{foot, meter},
    power::{horsepower, horsepower_metric, kilowatt, megawatt, watt},
    velocity::{kilometer_per_hour, knot, meter_per_second},
};

pub use display::{DisplayAngle, DisplayForce, DisplayLength, DisplayPower, DisplayVelocity};
pub use explicit_unit_values::{
    AngleValue, LengthValue, PowerValue, UnitError, VelocityValue, WithUnit,
};
