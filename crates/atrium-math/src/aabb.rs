//! Axis-aligned bounding box in f32 scene space.

use glam::Vec3;

/// Axis-aligned bounding box.
///
/// Invariant: min.x <= max.x, min.y <= max.y, min.z <= max.z.
/// The constructor enforces this by swapping components if needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from two corners. Automatically sorts components
    /// so that min <= max on every axis.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create an AABB from a center point and half-extents.
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Clamp a point onto or into the box, per axis.
    pub fn clamp_point(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }

    /// Returns a new AABB shrunk by the per-axis `margin` on each side.
    /// Collapses to the center plane on an axis where the margin exceeds
    /// the half-size.
    pub fn shrink_by(&self, margin: Vec3) -> Aabb {
        let center = (self.min + self.max) * 0.5;
        Aabb {
            min: (self.min + margin).min(center),
            max: (self.max - margin).max(center),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_inside() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));
        assert!(aabb.contains_point(Vec3::splat(5.0)));
    }

    #[test]
    fn test_contains_point_outside() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));
        assert!(!aabb.contains_point(Vec3::new(11.0, 5.0, 5.0)));
    }

    #[test]
    fn test_contains_point_on_boundary() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));
        assert!(aabb.contains_point(Vec3::ZERO));
        assert!(aabb.contains_point(Vec3::splat(10.0)));
    }

    #[test]
    fn test_clamp_point_pulls_outside_point_to_face() {
        let aabb = Aabb::new(Vec3::splat(-5.0), Vec3::splat(5.0));
        let clamped = aabb.clamp_point(Vec3::new(9.0, 0.0, -12.0));
        assert_eq!(clamped, Vec3::new(5.0, 0.0, -5.0));
    }

    #[test]
    fn test_clamp_point_leaves_inside_point_unchanged() {
        let aabb = Aabb::new(Vec3::splat(-5.0), Vec3::splat(5.0));
        let p = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(aabb.clamp_point(p), p);
    }

    #[test]
    fn test_shrink_by_insets_per_axis() {
        let aabb = Aabb::new(Vec3::splat(-10.0), Vec3::splat(10.0));
        let inner = aabb.shrink_by(Vec3::new(3.0, 2.0, 3.0));
        assert_eq!(inner.min, Vec3::new(-7.0, -8.0, -7.0));
        assert_eq!(inner.max, Vec3::new(7.0, 8.0, 7.0));
    }

    #[test]
    fn test_shrink_by_never_inverts() {
        let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let inner = aabb.shrink_by(Vec3::splat(5.0));
        assert!(inner.min.cmple(inner.max).all());
    }

    #[test]
    fn test_constructor_auto_sorts() {
        let aabb = Aabb::new(Vec3::splat(10.0), Vec3::ZERO);
        assert_eq!(aabb.min, Vec3::ZERO);
        assert_eq!(aabb.max, Vec3::splat(10.0));
    }

    #[test]
    fn test_from_center_half_extents() {
        let aabb = Aabb::from_center_half_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5));
        assert_eq!(aabb.min, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(aabb.max, Vec3::new(1.5, 2.5, 3.5));
    }
}
