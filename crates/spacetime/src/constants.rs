//! Physical constants of the simulated universe.
//!
//! Immutable, process-wide configuration; nothing here is reconfigurable at
//! runtime.

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.67408e-11;

/// Speed of light in m/s
///
/// Not used by the Newtonian force model; reserved for a future
/// relativistic correction (see [`Mass::relative_time`](crate::Mass::relative_time)).
pub const C: f64 = 299_792_458.0;
