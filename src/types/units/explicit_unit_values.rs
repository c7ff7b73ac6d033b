use serde::{self, Deserialize, Serialize};
use std::marker::PhantomData;
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Length, Power, Velocity},
    length::{foot, meter},
    power::{horsepower, horsepower_metric, kilowatt, megawatt},
    velocity::{kilometer_per_hour, knot, meter_per_second},
};

/// A raw number tagged with the unit it was entered in, as found in scenario files
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WithUnit<T> {
    pub value: f64,
    pub unit: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

pub type LengthValue = WithUnit<Length>;
pub type VelocityValue = WithUnit<Velocity>;
pub type PowerValue = WithUnit<Power>;
pub type AngleValue = WithUnit<Angle>;

impl<T> WithUnit<T> {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            _marker: PhantomData,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UnitError {
    #[error("Unknown length unit: {0}")]
    UnknownLengthUnit(String),

    #[error("Unknown speed unit: {0}")]
    UnknownVelocityUnit(String),

    #[error("Unknown power unit: {0}")]
    UnknownPowerUnit(String),

    #[error("Unknown angle unit: {0}")]
    UnknownAngleUnit(String),
}

impl WithUnit<Length> {
    pub fn to_length(&self) -> Result<Length, UnitError> {
        match self.unit.as_str() {
            "m" | "M"
            | "meter" | "Meter" | "METER"
            | "metre" | "Metre" | "METRE"
            | "meters" | "Meters" | "METERS"
            | "metres" | "Metres" | "METRES" => Ok(Length::new::<meter>(self.value)),
            "ft" | "Ft" | "FT"
            | "foot" | "Foot" | "FOOT"
            | "feet" | "Feet" | "FEET" => Ok(Length::new::<foot>(self.value)),
            _ => Err(UnitError::UnknownLengthUnit(self.unit.clone())),
        }
    }
}

impl WithUnit<Velocity> {
    pub fn to_velocity(&self) -> Result<Velocity, UnitError> {
        match self.unit.as_str() {
            "kn" | "Kn" | "KN"
            | "kt" | "kts" | "KT" | "KTS"
            | "knot" | "Knot" | "KNOT"
            | "knots" | "Knots" | "KNOTS" => Ok(Velocity::new::<knot>(self.value)),
            "m/s" | "M/S" | "mps" => Ok(Velocity::new::<meter_per_second>(self.value)),
            "km/h" | "KM/H" | "kph" | "KPH" => Ok(Velocity::new::<kilometer_per_hour>(self.value)),
            _ => Err(UnitError::UnknownVelocityUnit(self.unit.clone())),
        }
    }
}

impl WithUnit<Power> {
    pub fn to_power(&self) -> Result<Power, UnitError> {
        match self.unit.as_str() {
            "kW" | "kw" | "KW"
            | "kilowatt" | "Kilowatt" | "KILOWATT"
            | "kilowatts" | "Kilowatts" | "KILOWATTS" => Ok(Power::new::<kilowatt>(self.value)),
            "MW" | "mw"
            | "megawatt" | "Megawatt" | "MEGAWATT"
            | "megawatts" | "Megawatts" | "MEGAWATTS" => Ok(Power::new::<megawatt>(self.value)),
            "hp" | "HP" => Ok(Power::new::<horsepower>(self.value)),
            "ch" | "CV" | "PS" => Ok(Power::new::<horsepower_metric>(self.value)),
            _ => Err(UnitError::UnknownPowerUnit(self.unit.clone())),
        }
    }
}

impl WithUnit<Angle> {
    pub fn to_angle(&self) -> Result<Angle, UnitError> {
        match self.unit.as_str() {
            "deg" | "Deg" | "DEG"
            | "degree" | "Degree" | "DEGREE"
            | "degrees" | "Degrees" | "DEGREES" | "°" => Ok(Angle::new::<degree>(self.value)),
            "rad" | "Rad" | "RAD"
            | "radian" | "Radian" | "RADIAN"
            | "radians" | "Radians" | "RADIANS" => Ok(Angle::new::<radian>(self.value)),
            _ => Err(UnitError::UnknownAngleUnit(self.unit.clone())),
        }
    }
}
