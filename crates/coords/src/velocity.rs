//! Velocity in the local spherical basis.

use std::ops::{Add, Mul};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::position::{spherical_basis, Position};

/// A velocity expressed in the local spherical basis at a reference position.
///
/// - `v_r`: radial velocity (rate of change of r)
/// - `v_theta`: polar angular rate (rate of change of theta)
/// - `v_phi`: azimuthal angular rate (rate of change of phi)
///
/// The angular components are rates, not linear speeds; multiply by r (and
/// r·sin θ) to recover linear contributions. The reference position is not
/// stored, since it changes every step; the caller supplies it at every
/// conversion.
///
/// # Examples
///
/// ```
/// use coords::{Position, SphericalPoint, SphericalVelocity};
/// use nalgebra::Vector3;
///
/// let position = Position::from(SphericalPoint::new(10.0, 0.0, 0.0));
/// let v = SphericalVelocity::from_cartesian(Vector3::new(1.0, 0.0, 0.0), &position);
///
/// // Motion along +x at a point on the +x axis is purely radial.
/// assert!((v.v_r() - 1.0).abs() < 1e-12);
/// assert!((v.magnitude(&position) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalVelocity {
    v_r: f64,
    v_theta: f64,
    v_phi: f64,
}

impl SphericalVelocity {
    pub fn new(v_r: f64, v_theta: f64, v_phi: f64) -> Self {
        Self { v_r, v_theta, v_phi }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn v_r(&self) -> f64 {
        self.v_r
    }

    pub fn v_theta(&self) -> f64 {
        self.v_theta
    }

    pub fn v_phi(&self) -> f64 {
        self.v_phi
    }

    /// Decomposes a Cartesian velocity onto the local spherical basis at
    /// `position`.
    ///
    /// Degenerate frames are policy-defined rather than errors: at the
    /// origin the motion is treated as purely radial (v_r = |v|, angular
    /// rates zero), and on the polar axis the azimuthal rate is zero.
    pub fn from_cartesian(velocity: Vector3<f64>, position: &Position) -> Self {
        let r = position.r();
        if r == 0.0 {
            return Self::new(velocity.norm(), 0.0, 0.0);
        }

        let theta = position.theta();
        let (e_r, e_theta, e_phi) = spherical_basis(theta, position.phi());

        let v_r = velocity.dot(&e_r);
        let v_theta = velocity.dot(&e_theta) / r;
        let sin_theta = theta.sin();
        let v_phi = if sin_theta != 0.0 {
            velocity.dot(&e_phi) / (r * sin_theta)
        } else {
            0.0
        };

        Self::new(v_r, v_theta, v_phi)
    }

    /// Recomposes the Cartesian velocity at `position`.
    ///
    /// Exact algebraic inverse of [`from_cartesian`](Self::from_cartesian)
    /// for non-degenerate positions.
    pub fn to_cartesian(&self, position: &Position) -> Vector3<f64> {
        let r = position.r();
        let theta = position.theta();
        let (e_r, e_theta, e_phi) = spherical_basis(theta, position.phi());

        e_r * self.v_r + e_theta * (r * self.v_theta) + e_phi * (r * theta.sin() * self.v_phi)
    }

    /// Linear speed at `position`.
    pub fn magnitude(&self, position: &Position) -> f64 {
        let r = position.r();
        let sin_theta = position.theta().sin();

        let linear_theta = r * self.v_theta;
        let linear_phi = r * sin_theta * self.v_phi;
        (self.v_r * self.v_r + linear_theta * linear_theta + linear_phi * linear_phi).sqrt()
    }
}

impl Default for SphericalVelocity {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for SphericalVelocity {
    type Output = SphericalVelocity;

    fn add(self, other: SphericalVelocity) -> SphericalVelocity {
        SphericalVelocity::new(
            self.v_r + other.v_r,
            self.v_theta + other.v_theta,
            self.v_phi + other.v_phi,
        )
    }
}

impl Mul<f64> for SphericalVelocity {
    type Output = SphericalVelocity;

    fn mul(self, scalar: f64) -> SphericalVelocity {
        SphericalVelocity::new(self.v_r * scalar, self.v_theta * scalar, self.v_phi * scalar)
    }
}

impl Mul<SphericalVelocity> for f64 {
    type Output = SphericalVelocity;

    fn mul(self, velocity: SphericalVelocity) -> SphericalVelocity {
        velocity * self
    }
}
