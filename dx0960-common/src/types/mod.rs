pub mod config;
pub mod connector;
pub mod dsi;
pub mod error;
pub mod mode;

pub use config::*;
pub use connector::*;
pub use dsi::*;
pub use error::*;
pub use mode::*;
