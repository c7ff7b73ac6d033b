pub mod wind;
pub mod drift;
pub mod tug;
pub mod sog;
pub mod docking;

pub use wind::*;
pub use drift::*;
pub use tug::*;
pub use sog::*;
pub use docking::*;
