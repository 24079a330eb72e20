//! The base moving entity: a position, a velocity and an age.

use coords::{Position, SphericalPoint, SphericalVelocity};
use nalgebra::{Point3, Vector3};

/// A point entity moving through spherical coordinates.
///
/// The position is stored spherical-primary and built from Cartesian input;
/// the velocity is decomposed onto the local spherical basis at that
/// position. Age accumulates every time step and never decreases.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    position: Position,
    velocity: SphericalVelocity,
    age: f64,
}

impl Body {
    /// Creates a body from a Cartesian position and velocity.
    pub fn new(position: Point3<f64>, velocity: Vector3<f64>) -> Self {
        let position = Position::from(SphericalPoint::new(position.x, position.y, position.z));
        let velocity = SphericalVelocity::from_cartesian(velocity, &position);
        Self {
            position,
            velocity,
            age: 0.0,
        }
    }

    /// Advances the position by one time step of the current velocity.
    ///
    /// Each spherical component is incremented directly; the increments pass
    /// through the normalizing setters, so angles wrap by modulo and the
    /// radius clamps at zero.
    pub fn time_step(&mut self, dt: f64) {
        self.position.set_r(self.position.r() + self.velocity.v_r() * dt);
        self.position
            .set_theta(self.position.theta() + self.velocity.v_theta() * dt);
        self.position
            .set_phi(self.position.phi() + self.velocity.v_phi() * dt);
        self.age += dt;
    }

    /// Distance to another body.
    pub fn distance_from(&self, other: &Body) -> f64 {
        self.position.distance_to(&other.position)
    }

    pub fn x(&self) -> f64 {
        self.position.x()
    }

    pub fn y(&self) -> f64 {
        self.position.y()
    }

    pub fn z(&self) -> f64 {
        self.position.z()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn velocity(&self) -> &SphericalVelocity {
        &self.velocity
    }

    /// Replaces the velocity wholesale.
    pub fn set_velocity(&mut self, velocity: SphericalVelocity) {
        self.velocity = velocity;
    }

    /// Linear speed at the current position.
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude(&self.position)
    }

    /// Total simulated time this body has lived through, in seconds.
    pub fn age(&self) -> f64 {
        self.age
    }
}
