use std::fmt;

use crate::types::conversion::to_tonnes;
use crate::types::units::*;

#[derive(Debug, Clone, Copy)]
pub struct DisplayForce(pub Force);
#[derive(Debug, Clone, Copy)]
pub struct DisplayAngle(pub Angle);
#[derive(Debug, Clone, Copy)]
pub struct DisplayLength(pub Length);
#[derive(Debug, Clone, Copy)]
pub struct DisplayVelocity(pub Velocity);
#[derive(Debug, Clone, Copy)]
pub struct DisplayPower(pub Power);

impl fmt::Display for DisplayForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tonnes = to_tonnes(self.0);
        let kn = self.0.get::<kilonewton>();
        write!(f, "{:.1} T ({:.0} kN)", tonnes, kn)
    }
}

impl fmt::Display for DisplayAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0.get::<degree>())
    }
}

impl fmt::Display for DisplayLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meters = self.0.get::<meter>();
        let feet = self.0.get::<foot>();
        write!(f, "{:.2} m ({:.1} ft)", meters, feet)
    }
}

impl fmt::Display for DisplayVelocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kn = self.0.get::<knot>();
        let ms = self.0.get::<meter_per_second>();

        write!(f, "{:.2} kn ({:.2} m/s)", kn, ms)
    }
}

impl fmt::Display for DisplayPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kw = self.0.get::<kilowatt>();
        let hp = self.0.get::<horsepower_metric>();

        write!(f, "{:.0} kW ({:.0} hp)", kw, hp)
    }
}
