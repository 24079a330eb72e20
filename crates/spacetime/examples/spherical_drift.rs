//! Force-free motion seen through spherical coordinates.
//!
//! A single mass with no neighbors keeps its spherical velocity components
//! fixed, so radial motion grows r linearly while an azimuthal rate swings
//! phi around the z axis.
//!
//! Run with: cargo run --package spacetime --example spherical_drift

use nalgebra::{Point3, Vector3};
use spacetime::SpaceTime;

fn main() {
    println!("Force-free drift in spherical coordinates\n");
    println!("{}", "=".repeat(60));

    let mut world = SpaceTime::new();

    // Radially outward on the +x axis.
    let outbound = world.add_mass(1.0, Point3::new(10.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));

    // Tangential on the +y axis: decomposes to a pure phi rate.
    let circling = world.add_mass(1.0, Point3::new(0.0, 10.0, 0.0), Vector3::new(-1.0, 0.0, 0.0));

    println!(
        "{:>6} {:>12} {:>12} {:>12} {:>12}",
        "t (s)", "out r", "out phi", "circ r", "circ phi"
    );
    for _ in 0..10 {
        world.update(1.0);

        let out = world.get_mass(outbound).expect("outbound mass exists");
        let circ = world.get_mass(circling).expect("circling mass exists");
        println!(
            "{:>6.0} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
            world.age(),
            out.position().r(),
            out.position().phi(),
            circ.position().r(),
            circ.position().phi()
        );
    }
}
