//! A body with mass: gravity source and gravity subject.

use coords::{spherical_basis, Position, SphericalForce, SphericalVelocity};
use nalgebra::{Point3, Vector3};

use crate::body::Body;
use crate::constants::G;

/// A [`Body`] carrying scalar mass, a per-step net-force accumulator and a
/// per-step gravitational-potential accumulator.
///
/// Both accumulators are rebuilt from scratch by [`apply_gravity`](Self::apply_gravity)
/// each step; they are never carried across steps. Mass is taken as given
/// and not validated; non-positive values are the caller's responsibility.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point3, Vector3};
/// use spacetime::{Mass, G};
///
/// let a = Mass::new(5.0, Point3::new(0.0, 0.0, 0.0), Vector3::zeros());
/// let b = Mass::new(10.0, Point3::new(10.0, 0.0, 0.0), Vector3::zeros());
///
/// let force = b.force_from(&a);
/// let expected = G * 5.0 * 10.0 / 100.0;
/// assert!((force.magnitude() - expected).abs() < 1e-20);
/// // Attraction: the radial component pulls b inward, toward a.
/// assert!(force.f_r() < 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Mass {
    body: Body,
    mass: f64,
    net_force: SphericalForce,
    potential: f64,
}

impl Mass {
    /// Creates a mass from Cartesian position and velocity.
    ///
    /// # Arguments
    ///
    /// * `mass` - Mass in kg
    /// * `position` - Position in m
    /// * `velocity` - Velocity in m/s
    pub fn new(mass: f64, position: Point3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            body: Body::new(position, velocity),
            mass,
            net_force: SphericalForce::zero(),
            potential: 0.0,
        }
    }

    /// The gravitational force this mass feels from `other`, expressed in
    /// the local spherical basis at this mass's position.
    ///
    /// The magnitude is G·m₁·m₂/d². The direction is found by first taking
    /// the angular direction toward `other` and then projecting that unit
    /// vector onto the basis derived from this mass's own (theta, phi):
    /// the frame the force is consumed in, which generally differs from the
    /// direction-of-approach frame.
    ///
    /// Coincident positions yield a zero force rather than a division by
    /// zero; overlapping masses silently exert nothing on each other.
    pub fn force_from(&self, other: &Mass) -> SphericalForce {
        let distance = self.distance_from(other);
        if distance == 0.0 {
            return SphericalForce::zero();
        }

        let magnitude = G * self.mass * other.mass / (distance * distance);

        let (dir_theta, dir_phi) = self.body.position().direction_to(other.position());
        let (sin_dir, cos_dir) = dir_theta.sin_cos();
        let toward = Vector3::new(sin_dir * dir_phi.cos(), sin_dir * dir_phi.sin(), cos_dir);

        let (e_r, e_theta, e_phi) =
            spherical_basis(self.body.position().theta(), self.body.position().phi());

        SphericalForce::new(
            magnitude * toward.dot(&e_r),
            magnitude * toward.dot(&e_theta),
            magnitude * toward.dot(&e_phi),
        )
    }

    /// The gravitational potential `other` contributes at this mass's
    /// position, in J/kg. Zero for coincident positions.
    pub fn gravitational_potential_from(&self, other: &Mass) -> f64 {
        let distance = self.distance_from(other);
        if distance == 0.0 {
            return 0.0;
        }
        -G * other.mass / distance
    }

    /// Rebuilds the net-force and potential accumulators from the given set
    /// of other masses.
    ///
    /// Callers pass "every mass except this one"; positions are read but
    /// never written, so a whole population can run this against the same
    /// pre-step snapshot.
    pub fn apply_gravity<'a, I>(&mut self, others: I)
    where
        I: IntoIterator<Item = &'a Mass>,
    {
        self.net_force.reset();
        self.potential = 0.0;

        for other in others {
            let potential = self.gravitational_potential_from(other);
            let force = self.force_from(other);
            self.potential += potential;
            self.net_force += force;
        }
    }

    /// Integrates one time step from the accumulated net force.
    ///
    /// Semi-implicit order: acceleration from the current force, velocity
    /// from that acceleration, position from the updated velocity. The
    /// angular accelerations divide by r and r·sin θ; where those are
    /// exactly zero (a mass at the origin, or sitting on the polar axis)
    /// the corresponding angular term is skipped instead of dividing.
    /// A mass passing merely *near* a pole still sees very large angular
    /// accelerations.
    pub fn update_position(&mut self, dt: f64) {
        let dt = self.relative_time(dt);

        let r = self.body.position().r();
        let sin_theta = self.body.position().theta().sin();

        let a_r = self.net_force.f_r() / self.mass;
        let a_theta = if r > 0.0 {
            self.net_force.f_theta() / (self.mass * r)
        } else {
            0.0
        };
        let a_phi = if r > 0.0 && sin_theta != 0.0 {
            self.net_force.f_phi() / (self.mass * r * sin_theta)
        } else {
            0.0
        };

        let acceleration = SphericalVelocity::new(a_r, a_theta, a_phi);
        self.body
            .set_velocity(*self.body.velocity() + acceleration * dt);
        self.body.time_step(dt);
    }

    /// Hook for relativistic time dilation. Currently returns `dt`
    /// unchanged; not part of the force model's contract.
    pub fn relative_time(&self, dt: f64) -> f64 {
        dt
    }

    /// Distance to another mass.
    pub fn distance_from(&self, other: &Mass) -> f64 {
        self.body.distance_from(&other.body)
    }

    /// Linear momentum in Cartesian form, kg·m/s.
    pub fn momentum(&self) -> Vector3<f64> {
        self.body.velocity().to_cartesian(self.body.position()) * self.mass
    }

    /// Kinetic energy, J.
    pub fn kinetic_energy(&self) -> f64 {
        let speed = self.body.speed();
        0.5 * self.mass * speed * speed
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Net force accumulated by the most recent gravity pass.
    pub fn net_force(&self) -> &SphericalForce {
        &self.net_force
    }

    /// Gravitational potential accumulated by the most recent gravity pass,
    /// in J/kg.
    pub fn gravitational_potential(&self) -> f64 {
        self.potential
    }

    pub fn x(&self) -> f64 {
        self.body.x()
    }

    pub fn y(&self) -> f64 {
        self.body.y()
    }

    pub fn z(&self) -> f64 {
        self.body.z()
    }

    pub fn position(&self) -> &Position {
        self.body.position()
    }

    pub fn velocity(&self) -> &SphericalVelocity {
        self.body.velocity()
    }

    pub fn speed(&self) -> f64 {
        self.body.speed()
    }

    pub fn age(&self) -> f64 {
        self.body.age()
    }
}
