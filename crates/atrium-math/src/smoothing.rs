//! Exponential approach smoothing used by the camera and glow systems.

use glam::Vec3;

/// Move `current` a fixed fraction of the way toward `target`.
///
/// `factor` is the per-tick convergence rate (0.0 = frozen, 1.0 = snap).
/// Repeated application converges geometrically; the distance to target
/// after `k` ticks is `(1 - factor)^k` of the initial distance.
#[must_use]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Component-wise [`approach`] for vectors.
#[must_use]
pub fn approach_vec3(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current + (target - current) * factor
}
