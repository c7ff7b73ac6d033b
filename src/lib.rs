pub mod types;
pub mod error;
pub mod config;
pub mod vessel;
pub mod environment;
pub mod physics;
pub mod chart;
pub mod advisory;
pub mod calculator;
pub mod scenario;

pub use types::*;
pub use error::{ManeuverError, Result};
pub use calculator::{Calculator, ManeuverInputs, ManeuverReport, TextView, View};
