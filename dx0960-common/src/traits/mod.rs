pub mod backlight;
pub mod dcs;
pub mod panel;
pub mod regulator;
pub mod resources;

pub use backlight::*;
pub use dcs::*;
pub use panel::*;
pub use regulator::*;
pub use resources::*;
