//! Two-body free fall.
//!
//! Drops two equal masses toward each other from rest and tracks the
//! separation, the accumulated forces and the total momentum drift.
//!
//! Run with: cargo run --package spacetime --example two_body

use nalgebra::{Point3, Vector3};
use spacetime::{SpaceTime, G};

fn main() {
    println!("Two-body free fall\n");
    println!("{}", "=".repeat(60));

    let mass = 1.0e10; // kg
    let separation = 100.0; // m

    let mut world = SpaceTime::new();
    let a = world.add_mass(mass, Point3::new(-separation / 2.0, 0.0, 0.0), Vector3::zeros());
    let b = world.add_mass(mass, Point3::new(separation / 2.0, 0.0, 0.0), Vector3::zeros());

    let expected_force = G * mass * mass / (separation * separation);
    println!("Initial separation: {:.1} m", separation);
    println!("Pairwise force:     {:.6e} N", expected_force);

    let dt = 1.0; // s
    let n_steps = 60;

    println!("\n{:>6} {:>14} {:>16} {:>16}", "t (s)", "sep (m)", "|F| (N)", "|p_total|");
    for step in 0..n_steps {
        world.update(dt);

        if step % 10 == 9 {
            let mass_a = world.get_mass(a).expect("mass a exists");
            let mass_b = world.get_mass(b).expect("mass b exists");
            println!(
                "{:>6.0} {:>14.6} {:>16.6e} {:>16.3e}",
                world.age(),
                mass_a.distance_from(mass_b),
                mass_a.net_force().magnitude(),
                world.total_momentum().norm()
            );
        }
    }

    let mass_a = world.get_mass(a).expect("mass a exists");
    let mass_b = world.get_mass(b).expect("mass b exists");
    println!("\nFinal separation: {:.6} m", mass_a.distance_from(mass_b));
    println!("Kinetic energy:   {:.6e} J", world.kinetic_energy());
    println!(
        "Potential at a:   {:.6e} J/kg",
        mass_a.gravitational_potential()
    );
}
