//! Reference frames and the rotations between them

pub mod inertial;

pub use inertial::{EclipticToEquatorial, Equatorial, InertialFrame};
