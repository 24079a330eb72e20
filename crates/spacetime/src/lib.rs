//! Newtonian N-body simulation over spherical coordinates.
//!
//! A [`SpaceTime`] owns a collection of [`Mass`] entities and advances them
//! in globally-synchronous steps: first every mass accumulates gravity from
//! every other mass against a consistent pre-step snapshot, then every mass
//! integrates its own position. Positions, velocities and forces all live in
//! the spherical-coordinate types from the `coords` crate.

pub mod body;
pub mod constants;
pub mod mass;
pub mod state;

#[cfg(test)]
mod state_test;

pub use body::Body;
pub use constants::{C, G};
pub use mass::Mass;
pub use state::{MassId, SpaceTime};
