//! Coordinate value types shared by the projection stages

pub mod angle;
pub mod cartesian;

pub use angle::{mod2pi, Angle};
pub use cartesian::Cartesian3;

// Re-export the Equatorial coordinate system from framelib
pub use crate::framelib::inertial::Equatorial;
