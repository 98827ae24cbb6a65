pub mod config;
pub mod constants;
pub mod controller;
pub mod geometry;
pub mod host;
pub mod kinematics;
pub mod signals;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use geometry::*;
pub use host::*;
pub use kinematics::*;
pub use signals::*;
