pub mod profile;
pub mod presets;

pub use profile::*;
pub use presets::*;
