//! Conversions between Cartesian, polar, cylindrical and spherical coordinates.
//!
//! Y-up convention: theta is the azimuth measured from +Z toward +X,
//! phi is the inclination measured from +Y. All angles in radians.
//! Azimuth is undefined at the origin and on the vertical axis; it defaults to 0 there.

use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Threshold for "at the origin" and "on the polar axis".
pub const EPSILON: f32 = 1e-6;

/// 2D polar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    pub rho: f32,
    pub theta: f32,
}

/// Cylindrical coordinates around the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cylindrical {
    pub rho: f32,
    pub theta: f32,
    pub height: f32,
}

/// Spherical coordinates: distance, azimuth, inclination from +Y.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    pub rho: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Polar {
    pub fn new(rho: f32, theta: f32) -> Self {
        Self { rho, theta }
    }
}

impl Cylindrical {
    pub fn new(rho: f32, theta: f32, height: f32) -> Self {
        Self { rho, theta, height }
    }
}

impl Spherical {
    pub fn new(rho: f32, theta: f32, phi: f32) -> Self {
        Self { rho, theta, phi }
    }
}

/// Polar form of `cart`. With `keep_theta_positive` theta lands in [0, 2π),
/// otherwise in (−π, π].
pub fn cartesian_to_polar(cart: Vec2, keep_theta_positive: bool) -> Polar {
    let mut theta = cart.y.atan2(cart.x);
    if keep_theta_positive && theta < 0.0 {
        theta += TAU;
        // tiny negative angles round up to exactly TAU in f32
        if theta >= TAU {
            theta = 0.0;
        }
    }
    Polar {
        rho: cart.length(),
        theta,
    }
}

pub fn polar_to_cartesian(polar: Polar) -> Vec2 {
    let (sin, cos) = polar.theta.sin_cos();
    Vec2::new(cos, sin) * polar.rho
}

/// Cylindrical form of `cart` around the Y axis.
///
/// Points closer than [`EPSILON`] to the axis get `theta = 0`.
pub fn cartesian_to_cylindrical(cart: Vec3) -> Cylindrical {
    let rho = Vec2::new(cart.x, cart.z).length();
    let theta = if rho < EPSILON {
        0.0
    } else {
        azimuth(cart.x, cart.z)
    };
    Cylindrical {
        rho,
        theta,
        height: cart.y,
    }
}

/// Height is carried through as-is, so `rho == 0` maps to a point on the axis.
pub fn cylindrical_to_cartesian(cyl: Cylindrical) -> Vec3 {
    let (sin, cos) = cyl.theta.sin_cos();
    Vec3::new(cyl.rho * sin, cyl.height, cyl.rho * cos)
}

/// Spherical form of `cart`.
///
/// The origin yields `rho = theta = phi = 0`. Points on the Y axis keep
/// their `phi` (0 or π) and get `theta = 0`.
pub fn cartesian_to_spherical(cart: Vec3) -> Spherical {
    let rho = cart.length();
    if rho < EPSILON {
        return Spherical::new(rho, 0.0, 0.0);
    }

    // acos(y / rho), taken through atan2 to keep precision near the poles
    let phi = Vec2::new(cart.x, cart.z).length().atan2(cart.y);
    let theta = if phi < EPSILON || phi > PI - EPSILON {
        0.0
    } else {
        azimuth(cart.x, cart.z)
    };

    Spherical { rho, theta, phi }
}

pub fn spherical_to_cartesian(sph: Spherical) -> Vec3 {
    let (sin_phi, cos_phi) = sph.phi.sin_cos();
    let (sin_theta, cos_theta) = sph.theta.sin_cos();
    Vec3::new(sin_phi * sin_theta, cos_phi, sin_phi * cos_theta) * sph.rho
}

// Same angle as asin(x / radial) reflected to π - theta for z < 0, so the
// result spans [-π/2, 3π/2). atan2 avoids the precision loss of asin near ±1.
fn azimuth(x: f32, z: f32) -> f32 {
    let theta = x.atan2(z);
    if theta < -FRAC_PI_2 {
        theta + TAU
    } else {
        theta
    }
}

impl From<Vec2> for Polar {
    fn from(cart: Vec2) -> Self {
        cartesian_to_polar(cart, true)
    }
}

impl From<Polar> for Vec2 {
    fn from(polar: Polar) -> Self {
        polar_to_cartesian(polar)
    }
}

impl From<Vec3> for Cylindrical {
    fn from(cart: Vec3) -> Self {
        cartesian_to_cylindrical(cart)
    }
}

impl From<Cylindrical> for Vec3 {
    fn from(cyl: Cylindrical) -> Self {
        cylindrical_to_cartesian(cyl)
    }
}

impl From<Vec3> for Spherical {
    fn from(cart: Vec3) -> Self {
        cartesian_to_spherical(cart)
    }
}

impl From<Spherical> for Vec3 {
    fn from(sph: Spherical) -> Self {
        spherical_to_cartesian(sph)
    }
}
