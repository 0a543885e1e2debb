//! Deterministic per-index pseudo-random directions.
//!
//! Particle scatter trajectories must be reproducible from the particle
//! index alone, so they use sine-based hashing rather than an RNG stream.

use glam::Vec3;

/// Per-index seed scale for the scatter hash.
const SEED_SCALE: f32 = 0.123_45;

/// Fixed hash constants, one per axis.
const HASH_X: f32 = 12.9898;
const HASH_Y: f32 = 78.233;
const HASH_Z: f32 = 37.719;

/// Fallback direction substituted when a vector has no usable length.
pub const DEFAULT_DIRECTION: Vec3 = Vec3::X;

/// Deterministic unit scatter direction for a particle index.
///
/// Each component is a sine hash of the scaled index mapped to [-1, 1];
/// the result is normalized. Calling twice with the same index yields an
/// identical vector.
#[must_use]
pub fn scatter_direction(index: usize) -> Vec3 {
    let seed = index as f32 * SEED_SCALE;
    let raw = Vec3::new(
        (seed * HASH_X).sin() * 2.0 - 1.0,
        (seed * HASH_Y).sin() * 2.0 - 1.0,
        (seed * HASH_Z).sin() * 2.0 - 1.0,
    );
    normalize_or_default(raw)
}

/// Normalize a vector, substituting [`DEFAULT_DIRECTION`] when the length
/// is too small to divide by. A non-finite component in a position or
/// scale downstream is a programming defect, so the guard lives here.
#[must_use]
pub fn normalize_or_default(v: Vec3) -> Vec3 {
    if v.length_squared() > 1e-12 {
        v / v.length()
    } else {
        DEFAULT_DIRECTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_direction_is_deterministic() {
        for index in [0, 1, 17, 3999] {
            assert_eq!(scatter_direction(index), scatter_direction(index));
        }
    }

    #[test]
    fn test_scatter_direction_is_unit_length() {
        for index in 0..512 {
            let dir = scatter_direction(index);
            assert!(
                (dir.length() - 1.0).abs() < 1e-5,
                "index {index}: length {}",
                dir.length()
            );
        }
    }

    #[test]
    fn test_scatter_directions_vary_across_indices() {
        let a = scatter_direction(1);
        let b = scatter_direction(2);
        assert!((a - b).length() > 1e-3);
    }

    #[test]
    fn test_normalize_zero_vector_falls_back() {
        assert_eq!(normalize_or_default(Vec3::ZERO), DEFAULT_DIRECTION);
    }

    #[test]
    fn test_normalize_tiny_vector_falls_back() {
        assert_eq!(
            normalize_or_default(Vec3::splat(1e-10)),
            DEFAULT_DIRECTION
        );
    }

    #[test]
    fn test_normalize_regular_vector() {
        let n = normalize_or_default(Vec3::new(3.0, 0.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_index_zero_still_produces_unit_vector() {
        // seed 0 hashes every component to sin(0)*2-1 = -1; the vector
        // (-1,-1,-1) normalizes cleanly.
        let dir = scatter_direction(0);
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!((dir.x - (-1.0 / 3.0_f32.sqrt())).abs() < 1e-5);
    }
}
