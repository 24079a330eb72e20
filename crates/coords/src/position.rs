//! The dual-representation position type and shared coordinate conversions.

use std::f64::consts::TAU;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::cartesian_point::CartesianPoint;
use crate::spherical_point::SphericalPoint;

/// Convert Cartesian (x, y, z) to spherical (r, theta, phi).
///
/// The origin maps to (0, 0, 0) by convention. phi is normalized into
/// [0, 2π) so stored coordinates always satisfy the documented ranges.
pub(crate) fn cartesian_to_spherical(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let theta = (z / r).acos();
    let phi = y.atan2(x).rem_euclid(TAU);
    (r, theta, phi)
}

/// Convert spherical (r, theta, phi) to Cartesian (x, y, z).
pub(crate) fn spherical_to_cartesian(r: f64, theta: f64, phi: f64) -> (f64, f64, f64) {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    (
        r * sin_theta * cos_phi,
        r * sin_theta * sin_phi,
        r * cos_theta,
    )
}

/// Orthonormal local spherical basis (ê_r, ê_theta, ê_phi) at the given
/// angles.
///
/// The basis varies with position; velocity and force components only have
/// meaning together with the position whose angles produced the basis.
pub fn spherical_basis(theta: f64, phi: f64) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    let e_r = Vector3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta);
    let e_theta = Vector3::new(cos_theta * cos_phi, cos_theta * sin_phi, -sin_theta);
    let e_phi = Vector3::new(-sin_phi, cos_phi, 0.0);
    (e_r, e_theta, e_phi)
}

/// A point in 3-space with dual Cartesian/spherical access.
///
/// The two variants store different primary representations but expose the
/// same operation set and agree on every geometric query. Coordinates
/// foreign to the primary representation convert on every read and write.
///
/// # Examples
///
/// ```
/// use coords::{CartesianPoint, Position, SphericalPoint};
///
/// let a = Position::from(SphericalPoint::new(0.0, 0.0, 0.0));
/// let b = Position::from(CartesianPoint::new(3.0, 4.0, 0.0));
///
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
/// assert!((b.distance_to(&a) - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// Stores (r, theta, phi); Cartesian access converts on every use.
    Spherical(SphericalPoint),
    /// Stores (x, y, z); spherical access converts on every use.
    Cartesian(CartesianPoint),
}

impl Position {
    pub fn x(&self) -> f64 {
        match self {
            Position::Spherical(p) => p.x(),
            Position::Cartesian(p) => p.x(),
        }
    }

    pub fn y(&self) -> f64 {
        match self {
            Position::Spherical(p) => p.y(),
            Position::Cartesian(p) => p.y(),
        }
    }

    pub fn z(&self) -> f64 {
        match self {
            Position::Spherical(p) => p.z(),
            Position::Cartesian(p) => p.z(),
        }
    }

    /// Radial distance from the origin.
    pub fn r(&self) -> f64 {
        match self {
            Position::Spherical(p) => p.r(),
            Position::Cartesian(p) => p.r(),
        }
    }

    /// Polar angle from the +z axis, in [0, π].
    pub fn theta(&self) -> f64 {
        match self {
            Position::Spherical(p) => p.theta(),
            Position::Cartesian(p) => p.theta(),
        }
    }

    /// Azimuthal angle in the x-y plane, in [0, 2π).
    pub fn phi(&self) -> f64 {
        match self {
            Position::Spherical(p) => p.phi(),
            Position::Cartesian(p) => p.phi(),
        }
    }

    pub fn set_x(&mut self, value: f64) {
        match self {
            Position::Spherical(p) => p.set_x(value),
            Position::Cartesian(p) => p.set_x(value),
        }
    }

    pub fn set_y(&mut self, value: f64) {
        match self {
            Position::Spherical(p) => p.set_y(value),
            Position::Cartesian(p) => p.set_y(value),
        }
    }

    pub fn set_z(&mut self, value: f64) {
        match self {
            Position::Spherical(p) => p.set_z(value),
            Position::Cartesian(p) => p.set_z(value),
        }
    }

    /// Sets the radial distance; negative values clamp to zero.
    pub fn set_r(&mut self, value: f64) {
        match self {
            Position::Spherical(p) => p.set_r(value),
            Position::Cartesian(p) => p.set_r(value),
        }
    }

    /// Sets the polar angle, normalized into [0, π) by modulo.
    pub fn set_theta(&mut self, value: f64) {
        match self {
            Position::Spherical(p) => p.set_theta(value),
            Position::Cartesian(p) => p.set_theta(value),
        }
    }

    /// Sets the azimuthal angle, normalized into [0, 2π) by modulo.
    pub fn set_phi(&mut self, value: f64) {
        match self {
            Position::Spherical(p) => p.set_phi(value),
            Position::Cartesian(p) => p.set_phi(value),
        }
    }

    /// Euclidean distance to another position.
    ///
    /// When both operands are spherical-primary this stays entirely in
    /// spherical coordinates (law of cosines); any other pairing falls back
    /// to componentwise Cartesian subtraction. Both routes agree within
    /// floating-point tolerance.
    pub fn distance_to(&self, other: &Position) -> f64 {
        match (self, other) {
            (Position::Spherical(a), Position::Spherical(b)) => a.distance_to(b),
            (Position::Cartesian(a), Position::Cartesian(b)) => a.distance_to(b),
            _ => {
                let dx = other.x() - self.x();
                let dy = other.y() - self.y();
                let dz = other.z() - self.z();
                (dx * dx + dy * dy + dz * dz).sqrt()
            }
        }
    }

    /// Angular direction (theta, phi) of the displacement `other − self`.
    ///
    /// Returns (0, 0) for coincident points. phi is the raw `atan2` result
    /// in (−π, π]; a direction is not a stored coordinate and is not
    /// range-normalized.
    pub fn direction_to(&self, other: &Position) -> (f64, f64) {
        let dx = other.x() - self.x();
        let dy = other.y() - self.y();
        let dz = other.z() - self.z();

        let dist = (dx * dx + dy * dy + dz * dz).sqrt();
        if dist == 0.0 {
            return (0.0, 0.0);
        }
        ((dz / dist).acos(), dy.atan2(dx))
    }

    /// The position as a Cartesian point.
    pub fn to_cartesian(&self) -> Point3<f64> {
        Point3::new(self.x(), self.y(), self.z())
    }
}

impl From<SphericalPoint> for Position {
    fn from(point: SphericalPoint) -> Self {
        Position::Spherical(point)
    }
}

impl From<CartesianPoint> for Position {
    fn from(point: CartesianPoint) -> Self {
        Position::Cartesian(point)
    }
}
