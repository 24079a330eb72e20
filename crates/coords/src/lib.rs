//! Coordinate primitives for spherical-coordinate gravitational simulations.
//!
//! Points carry both Cartesian (x, y, z) and spherical (r, theta, phi)
//! access regardless of which representation they store internally.
//! Velocities and forces are expressed in the local spherical basis at a
//! reference position supplied by the caller.

pub mod cartesian_point;
pub mod force;
pub mod position;
pub mod spherical_point;
pub mod velocity;


pub use cartesian_point::CartesianPoint;
pub use force::SphericalForce;
pub use position::{spherical_basis, Position};
pub use spherical_point::SphericalPoint;
pub use velocity::SphericalVelocity;
