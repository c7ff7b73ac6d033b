pub mod units;
mod conversion;

pub use units::*;
pub use conversion::*;

// Re-export nalgebra
pub use nalgebra as na;

// Type aliases for domain clarity (zero cost)
pub type Speed = Velocity;
pub type WindSpeed = Velocity;
pub type BollardPull = Force;
pub type DriftAngle = Angle;

// Units the pilot reads on the bridge (just documentation)
/// Lengths and drafts: metres
pub const BRIDGE_LENGTH_UNIT: &str = "metres";
/// Speeds: knots
pub const BRIDGE_SPEED_UNIT: &str = "knots";
/// Forces: metric tonnes-force
pub const BRIDGE_FORCE_UNIT: &str = "tonnes-force";
