//! Cartesian-primary point storage.

use std::f64::consts::{PI, TAU};

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use crate::position::spherical_to_cartesian;

/// A point stored in Cartesian coordinates (x, y, z).
///
/// Spherical access converts on every read and write. Use this variant when
/// Cartesian operations dominate; for spherical-primary storage use
/// [`SphericalPoint`](crate::SphericalPoint) instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianPoint {
    x: f64,
    y: f64,
    z: f64,
}

impl CartesianPoint {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a point from spherical coordinates.
    pub fn from_spherical(r: f64, theta: f64, phi: f64) -> Self {
        let (x, y, z) = spherical_to_cartesian(r, theta, phi);
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Radial distance from the origin.
    pub fn r(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Polar angle from the +z axis, in [0, π]. Zero at the origin.
    pub fn theta(&self) -> f64 {
        let r = self.r();
        if r == 0.0 {
            return 0.0;
        }
        (self.z / r).acos()
    }

    /// Azimuthal angle in the x-y plane, in [0, 2π). Zero at the origin.
    pub fn phi(&self) -> f64 {
        self.y.atan2(self.x).rem_euclid(TAU)
    }

    pub fn set_x(&mut self, value: f64) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: f64) {
        self.y = value;
    }

    pub fn set_z(&mut self, value: f64) {
        self.z = value;
    }

    /// Sets the radial distance; negative values clamp to zero.
    ///
    /// From the origin the point is placed on the +z axis, consistent with
    /// the theta = 0 convention there; otherwise the point scales along its
    /// current direction.
    pub fn set_r(&mut self, value: f64) {
        let current_r = self.r();
        if current_r == 0.0 {
            self.z = value.max(0.0);
        } else {
            let scale = value.max(0.0) / current_r;
            self.x *= scale;
            self.y *= scale;
            self.z *= scale;
        }
    }

    /// Sets the polar angle, normalized into [0, π) by modulo, rebuilding
    /// the Cartesian coordinates from (r, theta, phi).
    ///
    /// At the origin the angle is absorbed: the rebuilt point stays at the
    /// origin until r becomes positive.
    pub fn set_theta(&mut self, value: f64) {
        let r = self.r();
        let phi = self.phi();
        let value = value.rem_euclid(PI);
        let (x, y, z) = spherical_to_cartesian(r, value, phi);
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Sets the azimuthal angle, normalized into [0, 2π) by modulo,
    /// rebuilding the Cartesian coordinates from (r, theta, phi).
    pub fn set_phi(&mut self, value: f64) {
        let r = self.r();
        let theta = self.theta();
        let value = value.rem_euclid(TAU);
        let (x, y, z) = spherical_to_cartesian(r, theta, value);
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Distance to another Cartesian-primary point by direct subtraction.
    pub fn distance_to(&self, other: &CartesianPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// The point as a nalgebra Cartesian point.
    pub fn to_cartesian(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }
}
