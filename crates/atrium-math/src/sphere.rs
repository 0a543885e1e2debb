//! Fibonacci sphere layout and ring placement helpers.

use glam::Vec3;
use std::f32::consts::PI;

/// Golden-angle multiplier: theta advances by pi * (1 + sqrt(5)) per index.
fn golden_angle() -> f32 {
    PI * (1.0 + 5.0_f32.sqrt())
}

/// Position of point `i` of `n` on a Fibonacci sphere of the given radius.
///
/// `phi = acos(1 - 2(i + 0.5)/n)`, `theta = pi(1 + sqrt(5)) * i`, then the
/// standard spherical-to-Cartesian conversion. Produces a near-uniform
/// point distribution for any `n >= 1`.
#[must_use]
pub fn fibonacci_sphere_point(i: usize, n: usize, radius: f32) -> Vec3 {
    let phi = (1.0 - 2.0 * (i as f32 + 0.5) / n as f32).acos();
    let theta = golden_angle() * i as f32;
    Vec3::new(
        radius * theta.cos() * phi.sin(),
        radius * theta.sin() * phi.sin(),
        radius * phi.cos(),
    )
}

/// Evenly spaced angle for slot `i` of `n` around a full circle.
#[must_use]
pub fn ring_angle(i: usize, n: usize) -> f32 {
    (i as f32 / n as f32) * 2.0 * PI
}
