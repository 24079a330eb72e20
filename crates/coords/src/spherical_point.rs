//! Spherical-primary point storage.

use std::f64::consts::{PI, TAU};

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::position::{cartesian_to_spherical, spherical_to_cartesian};

/// A point stored in spherical coordinates (r, theta, phi).
///
/// - `r`: radial distance from the origin, r ≥ 0
/// - `theta`: polar angle from the +z axis, in [0, π]
/// - `phi`: azimuthal angle in the x-y plane, in [0, 2π)
///
/// Cartesian access converts on every read and write, so repeated identical
/// sets round-trip without drift beyond floating-point error.
///
/// # Examples
///
/// ```
/// use coords::SphericalPoint;
///
/// let p = SphericalPoint::new(0.0, 0.0, 5.0);
/// assert!((p.r() - 5.0).abs() < 1e-12);
/// assert_eq!(p.theta(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphericalPoint {
    r: f64,
    theta: f64,
    phi: f64,
}

impl SphericalPoint {
    /// Creates a point from Cartesian input, converting once for storage.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let (r, theta, phi) = cartesian_to_spherical(x, y, z);
        Self { r, theta, phi }
    }

    /// Creates a point directly from spherical coordinates.
    ///
    /// The caller supplies in-range values; no normalization is applied.
    pub fn from_spherical(r: f64, theta: f64, phi: f64) -> Self {
        Self { r, theta, phi }
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn x(&self) -> f64 {
        spherical_to_cartesian(self.r, self.theta, self.phi).0
    }

    pub fn y(&self) -> f64 {
        spherical_to_cartesian(self.r, self.theta, self.phi).1
    }

    pub fn z(&self) -> f64 {
        spherical_to_cartesian(self.r, self.theta, self.phi).2
    }

    /// Sets the radial distance; negative values clamp to zero.
    pub fn set_r(&mut self, value: f64) {
        self.r = value.max(0.0);
    }

    /// Sets the polar angle, normalized into [0, π) by modulo.
    pub fn set_theta(&mut self, value: f64) {
        self.theta = value.rem_euclid(PI);
    }

    /// Sets the azimuthal angle, normalized into [0, 2π) by modulo.
    pub fn set_phi(&mut self, value: f64) {
        self.phi = value.rem_euclid(TAU);
    }

    /// Sets the Cartesian x coordinate by round-tripping through Cartesian
    /// form and re-deriving (r, theta, phi).
    pub fn set_x(&mut self, value: f64) {
        let (_, y, z) = spherical_to_cartesian(self.r, self.theta, self.phi);
        let (r, theta, phi) = cartesian_to_spherical(value, y, z);
        self.r = r;
        self.theta = theta;
        self.phi = phi;
    }

    pub fn set_y(&mut self, value: f64) {
        let (x, _, z) = spherical_to_cartesian(self.r, self.theta, self.phi);
        let (r, theta, phi) = cartesian_to_spherical(x, value, z);
        self.r = r;
        self.theta = theta;
        self.phi = phi;
    }

    pub fn set_z(&mut self, value: f64) {
        let (x, y, _) = spherical_to_cartesian(self.r, self.theta, self.phi);
        let (r, theta, phi) = cartesian_to_spherical(x, y, value);
        self.r = r;
        self.theta = theta;
        self.phi = phi;
    }

    /// Distance to another spherical-primary point via the spherical law of
    /// cosines, avoiding a full Cartesian round trip.
    ///
    /// Either point at the origin degenerates to the other's radius.
    pub fn distance_to(&self, other: &SphericalPoint) -> f64 {
        if self.r == 0.0 {
            return other.r;
        }
        if other.r == 0.0 {
            return self.r;
        }

        let cos_angle = self.theta.sin() * other.theta.sin() * (self.phi - other.phi).cos()
            + self.theta.cos() * other.theta.cos();
        // Clamp against floating-point drift outside [-1, 1].
        let cos_angle = cos_angle.clamp(-1.0, 1.0);

        let squared =
            self.r * self.r + other.r * other.r - 2.0 * self.r * other.r * cos_angle;
        // Nearly coincident points can land a hair below zero.
        squared.max(0.0).sqrt()
    }

    /// The point as a Cartesian point.
    pub fn to_cartesian(&self) -> Point3<f64> {
        let (x, y, z) = spherical_to_cartesian(self.r, self.theta, self.phi);
        Point3::new(x, y, z)
    }
}
