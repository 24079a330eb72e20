//! The world container and the two-phase step loop.

use nalgebra::{Point3, Vector3};

use crate::mass::Mass;

/// Stable handle to a mass inside a [`SpaceTime`].
///
/// Masses are never removed, so the handle doubles as an index into the
/// contiguous store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MassId(pub u32);

/// Complete state of a simulated universe: the masses, in insertion order,
/// and the total simulated time.
///
/// # Examples
///
/// ```
/// use nalgebra::{Point3, Vector3};
/// use spacetime::SpaceTime;
///
/// let mut world = SpaceTime::new();
/// let id = world.add_mass(10.0, Point3::new(10.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
///
/// world.update(3.0);
///
/// let mass = world.get_mass(id).unwrap();
/// assert!((world.age() - 3.0).abs() < 1e-15);
/// assert!((mass.position().r() - 13.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct SpaceTime {
    masses: Vec<Mass>,
    age: f64,
    next_id: u32,
}

impl SpaceTime {
    /// Creates an empty universe at age zero.
    pub fn new() -> Self {
        Self {
            masses: Vec::new(),
            age: 0.0,
            next_id: 0,
        }
    }

    /// Adds a mass from Cartesian initial conditions and returns its handle.
    ///
    /// # Arguments
    ///
    /// * `mass` - Mass in kg
    /// * `position` - Initial position in m
    /// * `velocity` - Initial velocity in m/s
    pub fn add_mass(&mut self, mass: f64, position: Point3<f64>, velocity: Vector3<f64>) -> MassId {
        let id = MassId(self.next_id);
        self.next_id += 1;
        self.masses.push(Mass::new(mass, position, velocity));
        id
    }

    /// Advances the simulation by one time step.
    ///
    /// Two strictly separated phases keep the result independent of
    /// iteration order:
    ///
    /// 1. Force phase: every mass rebuilds its force and potential
    ///    accumulators against every other mass. Positions are only read
    ///    here, so all masses see the same pre-step snapshot.
    /// 2. Integration phase: every mass integrates its own position from
    ///    the forces of phase 1.
    ///
    /// Interleaving the phases would let a mass feel another's already
    /// updated position within the same step.
    pub fn update(&mut self, dt: f64) {
        for index in 0..self.masses.len() {
            let (before, rest) = self.masses.split_at_mut(index);
            if let Some((current, after)) = rest.split_first_mut() {
                current.apply_gravity(before.iter().chain(after.iter()));
            }
        }

        for mass in &mut self.masses {
            mass.update_position(dt);
        }

        self.age += dt;
    }

    /// Looks up a mass by handle.
    pub fn get_mass(&self, id: MassId) -> Option<&Mass> {
        self.masses.get(id.0 as usize)
    }

    /// The masses, in insertion order.
    pub fn masses(&self) -> &[Mass] {
        &self.masses
    }

    pub fn mass_count(&self) -> usize {
        self.masses.len()
    }

    /// Total simulated time, in seconds.
    pub fn age(&self) -> f64 {
        self.age
    }

    /// Total linear momentum of all masses in Cartesian form.
    ///
    /// Approximately constant for an isolated system; useful for checking
    /// numerical drift.
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.masses
            .iter()
            .map(Mass::momentum)
            .fold(Vector3::zeros(), |acc, p| acc + p)
    }

    /// Total kinetic energy of all masses, J.
    pub fn kinetic_energy(&self) -> f64 {
        self.masses.iter().map(Mass::kinetic_energy).sum()
    }
}

impl Default for SpaceTime {
    fn default() -> Self {
        Self::new()
    }
}
