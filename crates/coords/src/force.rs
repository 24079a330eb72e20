//! Force in the local spherical basis.

use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// A force expressed in the local spherical basis.
///
/// - `f_r`: radial component
/// - `f_theta`: polar component
/// - `f_phi`: azimuthal component
///
/// The angular components are raw basis projections, not pre-scaled by r;
/// converting them to angular acceleration divides by m·r (and m·r·sin θ).
/// No position is stored; the basis is implied by whichever position the
/// force was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalForce {
    f_r: f64,
    f_theta: f64,
    f_phi: f64,
}

impl SphericalForce {
    pub fn new(f_r: f64, f_theta: f64, f_phi: f64) -> Self {
        Self { f_r, f_theta, f_phi }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn f_r(&self) -> f64 {
        self.f_r
    }

    pub fn f_theta(&self) -> f64 {
        self.f_theta
    }

    pub fn f_phi(&self) -> f64 {
        self.f_phi
    }

    pub fn magnitude(&self) -> f64 {
        (self.f_r * self.f_r + self.f_theta * self.f_theta + self.f_phi * self.f_phi).sqrt()
    }

    /// Zeroes all components in place, keeping the accumulator allocation.
    pub fn reset(&mut self) {
        self.f_r = 0.0;
        self.f_theta = 0.0;
        self.f_phi = 0.0;
    }
}

impl Default for SphericalForce {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for SphericalForce {
    type Output = SphericalForce;

    fn add(self, other: SphericalForce) -> SphericalForce {
        SphericalForce::new(
            self.f_r + other.f_r,
            self.f_theta + other.f_theta,
            self.f_phi + other.f_phi,
        )
    }
}

impl AddAssign for SphericalForce {
    fn add_assign(&mut self, other: SphericalForce) {
        self.f_r += other.f_r;
        self.f_theta += other.f_theta;
        self.f_phi += other.f_phi;
    }
}

impl Mul<f64> for SphericalForce {
    type Output = SphericalForce;

    fn mul(self, scalar: f64) -> SphericalForce {
        SphericalForce::new(self.f_r * scalar, self.f_theta * scalar, self.f_phi * scalar)
    }
}

impl Mul<SphericalForce> for f64 {
    type Output = SphericalForce;

    fn mul(self, force: SphericalForce) -> SphericalForce {
        force * self
    }
}
