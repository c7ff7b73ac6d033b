use serde::{Deserialize, Serialize};

use crate::types::*;
use crate::vessel::VesselProfile;

/// Ship categories with typical hull form and windage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipType {
    /// Large container ship
    LargeContainer,
    /// VLCC / Suezmax tanker
    Tanker,
    /// Capesize bulk carrier
    BulkCarrier,
    /// LNG carrier
    LngCarrier,
}

/// Typical Cb, Cp and air draft for a ship type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullDefaults {
    pub block_coefficient: f64,
    pub porosity_coefficient: f64,
    pub air_draft: Length,
}

impl ShipType {
    pub const ALL: [ShipType; 4] = [
        ShipType::LargeContainer,
        ShipType::Tanker,
        ShipType::BulkCarrier,
        ShipType::LngCarrier,
    ];

    pub fn defaults(&self) -> HullDefaults {
        let (cb, cp, air_m) = match self {
            ShipType::LargeContainer => (0.70, 0.85, 55.0),
            ShipType::Tanker => (0.85, 0.70, 35.0),
            ShipType::BulkCarrier => (0.82, 0.75, 30.0),
            ShipType::LngCarrier => (0.75, 0.90, 45.0),
        };

        HullDefaults {
            block_coefficient: cb,
            porosity_coefficient: cp,
            air_draft: Length::new::<meter>(air_m),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShipType::LargeContainer => "Container ship (large)",
            ShipType::Tanker => "Tanker (VLCC/Suezmax)",
            ShipType::BulkCarrier => "Bulk carrier (Capesize)",
            ShipType::LngCarrier => "LNG carrier",
        }
    }
}

impl VesselProfile {
    /// Build a profile from a ship type's hull defaults
    ///
    /// Lpp, draft and installed power always come from the ship's particulars.
    pub fn from_preset(
        ship_type: ShipType,
        lpp: Length,
        draft: Length,
        engine_power: Power,
        bow_thruster_power: Power,
    ) -> Self {
        let d = ship_type.defaults();
        Self::new(
            lpp,
            d.air_draft,
            draft,
            d.block_coefficient,
            d.porosity_coefficient,
            engine_power,
            bow_thruster_power,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tanker_defaults() {
        let d = ShipType::Tanker.defaults();
        assert_eq!(d.block_coefficient, 0.85);
        assert_eq!(d.porosity_coefficient, 0.70);
        assert_relative_eq!(d.air_draft.get::<meter>(), 35.0, epsilon = 1e-9);
    }

    #[test]
    fn test_presets_are_valid_profiles() {
        for ship_type in ShipType::ALL {
            let vessel = VesselProfile::from_preset(
                ship_type,
                Length::new::<meter>(300.0),
                Length::new::<meter>(14.0),
                Power::new::<kilowatt>(30000.0),
                Power::new::<kilowatt>(2000.0),
            );
            assert!(vessel.validate().is_ok(), "{}", ship_type.label());
        }
    }

    #[test]
    fn test_lng_carrier_has_most_windage() {
        // Same Lpp: LNGC air draft * Cp beats the bulk carrier by a wide margin
        let area = |t: ShipType| {
            VesselProfile::from_preset(
                t,
                Length::new::<meter>(300.0),
                Length::new::<meter>(12.0),
                Power::new::<kilowatt>(0.0),
                Power::new::<kilowatt>(0.0),
            )
            .windage_area_m2()
        };
        assert!(area(ShipType::LngCarrier) > area(ShipType::BulkCarrier));
    }
}
