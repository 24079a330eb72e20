use std::f64::consts::FRAC_PI_4;

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use crate::constants::G;
use crate::state::{MassId, SpaceTime};

#[test]
fn test_add_mass_assigns_sequential_handles() {
    let mut world = SpaceTime::new();

    let first = world.add_mass(1.0, Point3::new(1.0, 0.0, 0.0), Vector3::zeros());
    let second = world.add_mass(2.0, Point3::new(2.0, 0.0, 0.0), Vector3::zeros());

    assert_eq!(first, MassId(0));
    assert_eq!(second, MassId(1));
    assert_eq!(world.mass_count(), 2);
}

#[test]
fn test_get_mass_by_handle() {
    let mut world = SpaceTime::new();
    let id = world.add_mass(7.0, Point3::new(3.0, 4.0, 0.0), Vector3::zeros());

    let mass = world.get_mass(id).unwrap();
    assert_eq!(mass.mass(), 7.0);
    assert_relative_eq!(mass.x(), 3.0, epsilon = 1e-9);

    assert!(world.get_mass(MassId(99)).is_none());
}

#[test]
fn test_masses_keep_insertion_order() {
    let mut world = SpaceTime::new();
    world.add_mass(1.0, Point3::new(1.0, 0.0, 0.0), Vector3::zeros());
    world.add_mass(2.0, Point3::new(2.0, 0.0, 0.0), Vector3::zeros());
    world.add_mass(3.0, Point3::new(3.0, 0.0, 0.0), Vector3::zeros());

    let masses: Vec<f64> = world.masses().iter().map(|m| m.mass()).collect();
    assert_eq!(masses, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_update_advances_age_without_masses() {
    let mut world = SpaceTime::new();

    world.update(0.25);
    world.update(0.25);

    assert_relative_eq!(world.age(), 0.5, epsilon = 1e-15);
}

#[test]
fn test_two_body_forces_after_one_step() {
    // 5 kg at the origin, 10 kg on the +x axis at distance 10: both net
    // forces have magnitude G·5·10/100 and point along the x axis toward
    // the other mass.
    let mut world = SpaceTime::new();
    let a = world.add_mass(5.0, Point3::new(0.0, 0.0, 0.0), Vector3::zeros());
    let b = world.add_mass(10.0, Point3::new(10.0, 0.0, 0.0), Vector3::zeros());

    world.update(1.0);

    let expected = G * 5.0 * 10.0 / 100.0;
    let mass_a = world.get_mass(a).unwrap();
    let mass_b = world.get_mass(b).unwrap();

    assert_relative_eq!(mass_a.net_force().magnitude(), expected, max_relative = 1e-12);
    assert_relative_eq!(mass_b.net_force().magnitude(), expected, max_relative = 1e-12);

    // Attraction: b's pull is radially inward (toward the origin); a's pull
    // lands in its polar component pointing along +x (theta = 0 at the
    // origin puts ê_theta on the x axis).
    assert_relative_eq!(mass_b.net_force().f_r(), -expected, max_relative = 1e-12);
    assert_relative_eq!(mass_a.net_force().f_theta(), expected, max_relative = 1e-12);

    // b picked up inward radial velocity from the step.
    assert!(mass_b.velocity().v_r() < 0.0);

    // The guarded origin mass stays finite.
    assert!(mass_a.speed().is_finite());
}

#[test]
fn test_free_mass_drifts_radially() {
    let mut world = SpaceTime::new();
    let id = world.add_mass(10.0, Point3::new(10.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));

    let mut previous_r = world.get_mass(id).unwrap().position().r();
    for _ in 0..3 {
        world.update(1.0);
        let r = world.get_mass(id).unwrap().position().r();
        assert!(r > previous_r);
        previous_r = r;
    }

    let mass = world.get_mass(id).unwrap();
    assert_relative_eq!(mass.position().r(), 13.0, epsilon = 1e-9);
    assert_relative_eq!(mass.age(), 3.0, epsilon = 1e-12);
}

#[test]
fn test_cartesian_construction_recovers_spherical_components() {
    let z = 10.0 / 2.0_f64.sqrt();
    let mut world = SpaceTime::new();
    let id = world.add_mass(1.0, Point3::new(5.0, 5.0, z), Vector3::zeros());

    let position = world.get_mass(id).unwrap().position();
    assert_relative_eq!(position.r(), 10.0, epsilon = 1e-9);
    assert_relative_eq!(position.theta(), FRAC_PI_4, epsilon = 1e-9);
    assert_relative_eq!(position.phi(), FRAC_PI_4, epsilon = 1e-9);
}

#[test]
fn test_symmetric_pair_conserves_momentum_and_center_of_mass() {
    let mut world = SpaceTime::new();
    let a = world.add_mass(1.0e10, Point3::new(-10.0, 0.0, 0.0), Vector3::zeros());
    let b = world.add_mass(1.0e10, Point3::new(10.0, 0.0, 0.0), Vector3::zeros());

    for _ in 0..5 {
        world.update(0.5);
    }

    let mass_a = world.get_mass(a).unwrap();
    let mass_b = world.get_mass(b).unwrap();

    // Attraction shrank the separation.
    assert!(mass_a.distance_from(mass_b) < 20.0);

    // Equal and opposite forces leave the total momentum and the center of
    // mass where they started.
    let momentum = world.total_momentum();
    let speed_scale = mass_a.momentum().norm();
    assert!(momentum.norm() < 1e-9 * speed_scale.max(1.0));

    let com_x = (mass_a.x() * mass_a.mass() + mass_b.x() * mass_b.mass())
        / (mass_a.mass() + mass_b.mass());
    assert_relative_eq!(com_x, 0.0, epsilon = 1e-6);
}

#[test]
fn test_forces_use_pre_step_snapshot() {
    // With the force phase fully materialized before integration, the
    // accumulated forces after one step must match a hand computation from
    // the initial geometry, for every mass regardless of iteration order.
    let mut world = SpaceTime::new();
    let a = world.add_mass(2.0, Point3::new(0.0, 0.0, 0.0), Vector3::zeros());
    let b = world.add_mass(3.0, Point3::new(6.0, 0.0, 0.0), Vector3::zeros());
    let c = world.add_mass(4.0, Point3::new(-4.0, 0.0, 0.0), Vector3::zeros());

    world.update(1.0);

    // Pairwise magnitudes from the pre-step separations: ab = 6, ac = 4,
    // bc = 10.
    let f_ab = G * 2.0 * 3.0 / 36.0;
    let f_ac = G * 2.0 * 4.0 / 16.0;
    let f_bc = G * 3.0 * 4.0 / 100.0;

    // a at the origin feels b along +x and c along -x, both in f_theta.
    let net_a = world.get_mass(a).unwrap().net_force();
    assert_relative_eq!(net_a.f_theta(), f_ab - f_ac, max_relative = 1e-9);

    // b feels both a and c radially inward.
    let net_b = world.get_mass(b).unwrap().net_force();
    assert_relative_eq!(net_b.f_r(), -(f_ab + f_bc), max_relative = 1e-9);

    // c feels a and b radially inward (its +x-ward pull is -r̂ at x < 0).
    let net_c = world.get_mass(c).unwrap().net_force();
    assert_relative_eq!(net_c.f_r(), -(f_ac + f_bc), max_relative = 1e-9);
}

#[test]
fn test_potential_total_is_insertion_order_independent() {
    let configs = [
        (11.0, (5.0, 0.0, 0.0)),
        (23.0, (-3.0, 4.0, 1.0)),
        (47.0, (0.0, -6.0, 2.5)),
        (5.0, (1.0, 1.0, -2.0)),
    ];

    let mut forward = SpaceTime::new();
    for (mass, (x, y, z)) in configs {
        forward.add_mass(mass, Point3::new(x, y, z), Vector3::zeros());
    }
    forward.update(1.0e-6);

    let mut reverse = SpaceTime::new();
    for &(mass, (x, y, z)) in configs.iter().rev() {
        reverse.add_mass(mass, Point3::new(x, y, z), Vector3::zeros());
    }
    reverse.update(1.0e-6);

    let total_forward: f64 = forward
        .masses()
        .iter()
        .map(|m| m.gravitational_potential())
        .sum();
    let total_reverse: f64 = reverse
        .masses()
        .iter()
        .map(|m| m.gravitational_potential())
        .sum();

    assert_relative_eq!(total_forward, total_reverse, max_relative = 1e-12);
}
