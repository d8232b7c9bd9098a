use approx::assert_relative_eq;
use glam::{Vec2, Vec3};
use orbit_camera::coords::{
    cartesian_to_cylindrical, cartesian_to_polar, cartesian_to_spherical,
    cylindrical_to_cartesian, polar_to_cartesian, spherical_to_cartesian, Cylindrical, Polar,
    Spherical,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

const TOLERANCE: f32 = 1e-4;

fn assert_vec3_close(actual: Vec3, expected: Vec3) {
    let scale = expected.length().max(1.0);
    assert!(
        actual.abs_diff_eq(expected, TOLERANCE * scale),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn sample_points() -> Vec<Vec3> {
    vec![
        Vec3::new(3.0, 4.0, 5.0),
        Vec3::new(3.0, 4.0, -5.0),
        Vec3::new(-2.0, 1.0, 7.0),
        Vec3::new(-1.0, -2.0, -3.0),
        Vec3::new(0.5, -8.0, 0.25),
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -6.0),
        Vec3::new(-0.001, 0.002, 0.003),
        // Nearly on the X axis: z is tiny next to x
        Vec3::new(46.674408, -33.004166, -0.027740479),
        Vec3::new(94.10033, 16.720772, 0.030471802),
        Vec3::new(-80.0, 5.0, 0.01),
        Vec3::new(-60.0, -2.0, -0.004),
    ]
}

fn relative_error(actual: Vec3, expected: Vec3) -> f32 {
    (actual - expected).length() / expected.length()
}

fn random_points(count: usize) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
            )
        })
        // Skip the origin and the neighbourhood of the polar axis
        .filter(|p| p.length() > 1e-3 && Vec2::new(p.x, p.z).length() > 1e-3 * p.length())
        .collect()
}

#[test]
fn test_polar_round_trip() {
    let points = [
        Vec2::new(1.0, 0.0),
        Vec2::new(3.0, 4.0),
        Vec2::new(-3.0, 4.0),
        Vec2::new(-2.5, -7.0),
        Vec2::new(0.25, -0.1),
    ];

    for &p in &points {
        for keep_positive in [true, false] {
            let back = polar_to_cartesian(cartesian_to_polar(p, keep_positive));
            assert!(
                back.abs_diff_eq(p, TOLERANCE * p.length().max(1.0)),
                "expected {:?}, got {:?}",
                p,
                back
            );
        }
    }
}

#[test]
fn test_polar_domain() {
    for i in 0..64 {
        let angle = i as f32 / 64.0 * TAU - PI;
        let p = Vec2::new(angle.cos(), angle.sin()) * (1.0 + i as f32);

        let positive = cartesian_to_polar(p, true);
        assert!(positive.rho >= 0.0);
        assert!(positive.theta >= 0.0 && positive.theta < TAU, "theta {}", positive.theta);

        let signed = cartesian_to_polar(p, false);
        assert!(signed.theta > -PI - 1e-6 && signed.theta <= PI + 1e-6);
    }
}

#[test]
fn test_polar_tiny_negative_angle_stays_in_range() {
    for y in [-1e-8_f32, -1e-7, -f32::MIN_POSITIVE] {
        let polar = cartesian_to_polar(Vec2::new(1.0, y), true);
        assert!(polar.theta >= 0.0 && polar.theta < TAU, "theta {}", polar.theta);
    }
}

#[test]
fn test_polar_known_values() {
    let polar = cartesian_to_polar(Vec2::new(3.0, 4.0), true);
    assert_relative_eq!(polar.rho, 5.0);
    assert_relative_eq!(polar.theta, 4.0_f32.atan2(3.0));

    let cart = polar_to_cartesian(Polar::new(2.0, FRAC_PI_2));
    assert!(cart.abs_diff_eq(Vec2::new(0.0, 2.0), 1e-6));
}

#[test]
fn test_polar_origin() {
    let polar = cartesian_to_polar(Vec2::ZERO, true);
    assert_eq!(polar.rho, 0.0);
    assert_eq!(polar.theta, 0.0);
}

#[test]
fn test_spherical_round_trip() {
    for p in sample_points() {
        let back = spherical_to_cartesian(cartesian_to_spherical(p));
        assert_vec3_close(back, p);
    }
}

#[test]
fn test_spherical_round_trip_random() {
    let mut worst = 0.0_f32;
    for p in random_points(20_000) {
        let back = spherical_to_cartesian(cartesian_to_spherical(p));
        worst = worst.max(relative_error(back, p));
    }
    assert!(worst < 1e-4, "worst relative error {}", worst);
}

#[test]
fn test_spherical_ranges() {
    for p in sample_points() {
        let sph = cartesian_to_spherical(p);
        assert!(sph.rho >= 0.0);
        assert!(sph.phi >= 0.0 && sph.phi <= PI);
        assert!(sph.theta >= -FRAC_PI_2 - 1e-6 && sph.theta <= 3.0 * FRAC_PI_2 + 1e-6);
    }
}

#[test]
fn test_spherical_origin() {
    let sph = cartesian_to_spherical(Vec3::ZERO);
    assert_eq!(sph.rho, 0.0);
    assert_eq!(sph.theta, 0.0);
    assert_eq!(sph.phi, 0.0);
}

#[test]
fn test_spherical_north_pole() {
    let sph = cartesian_to_spherical(Vec3::new(0.0, 5.0, 0.0));
    assert_relative_eq!(sph.rho, 5.0);
    assert!(sph.phi.abs() < 1e-6);
    assert_eq!(sph.theta, 0.0);
    assert_vec3_close(spherical_to_cartesian(sph), Vec3::new(0.0, 5.0, 0.0));
}

#[test]
fn test_spherical_axis_directions() {
    let x = cartesian_to_spherical(Vec3::X);
    assert_relative_eq!(x.phi, FRAC_PI_2, epsilon = 1e-6);
    assert_relative_eq!(x.theta, FRAC_PI_2, epsilon = 1e-6);

    let z = cartesian_to_spherical(Vec3::Z);
    assert_relative_eq!(z.phi, FRAC_PI_2, epsilon = 1e-6);
    assert!(z.theta.abs() < 1e-6);

    let neg_z = cartesian_to_spherical(-Vec3::Z);
    assert_relative_eq!(neg_z.theta, PI, epsilon = 1e-6);
}

#[test]
fn test_spherical_to_cartesian_default_orbit() {
    let eye = spherical_to_cartesian(Spherical::new(10.0, FRAC_PI_4, FRAC_PI_4));
    assert_vec3_close(eye, Vec3::new(5.0, 10.0 * FRAC_PI_4.cos(), 5.0));
}

#[test]
fn test_cylindrical_round_trip() {
    for p in sample_points() {
        let back = cylindrical_to_cartesian(cartesian_to_cylindrical(p));
        assert_vec3_close(back, p);
    }
}

#[test]
fn test_cylindrical_round_trip_random() {
    let mut worst = 0.0_f32;
    for p in random_points(20_000) {
        let back = cylindrical_to_cartesian(cartesian_to_cylindrical(p));
        worst = worst.max(relative_error(back, p));
    }
    assert!(worst < 1e-4, "worst relative error {}", worst);
}

#[test]
fn test_cylindrical_known_values() {
    let cyl = cartesian_to_cylindrical(Vec3::new(3.0, 2.0, 4.0));
    assert_relative_eq!(cyl.rho, 5.0);
    assert_relative_eq!(cyl.theta, 0.6_f32.asin(), epsilon = 1e-6);
    assert_eq!(cyl.height, 2.0);

    let behind = cartesian_to_cylindrical(Vec3::new(3.0, 2.0, -4.0));
    assert_relative_eq!(behind.theta, PI - 0.6_f32.asin(), epsilon = 1e-6);
}

#[test]
fn test_cylindrical_axis_point() {
    let cyl = cartesian_to_cylindrical(Vec3::new(0.0, -9.0, 0.0));
    assert_eq!(cyl, Cylindrical::new(0.0, 0.0, -9.0));

    let cart = cylindrical_to_cartesian(cyl);
    assert_vec3_close(cart, Vec3::new(0.0, -9.0, 0.0));
}

#[test]
fn test_from_conversions_match_functions() {
    let p = Vec3::new(-2.0, 1.0, 7.0);
    assert_eq!(Spherical::from(p), cartesian_to_spherical(p));
    assert_eq!(Cylindrical::from(p), cartesian_to_cylindrical(p));

    let sph = Spherical::new(3.0, 1.0, 2.0);
    assert_eq!(Vec3::from(sph), spherical_to_cartesian(sph));

    let q = Vec2::new(-1.0, -1.0);
    assert_eq!(Polar::from(q), cartesian_to_polar(q, true));
}
