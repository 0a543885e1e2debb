//! Math primitives shared across the Atrium simulation crates.

pub mod aabb;
pub mod easing;
pub mod hash;
pub mod smoothing;
pub mod sphere;

pub use aabb::Aabb;
pub use easing::ease_in_out;
pub use hash::{DEFAULT_DIRECTION, normalize_or_default, scatter_direction};
pub use smoothing::{approach, approach_vec3};
pub use sphere::{fibonacci_sphere_point, ring_angle};
