//! Particle field animator.
//!
//! Owns the fixed particle population: each particle has an origin on the
//! Fibonacci sphere and a target slot on the gateway ring, both fixed at
//! creation. Every tick the field recomputes each particle's transform as
//! a composition of up to three displacement effects (morph, dissolve,
//! gateway blend), or one of the two travel-era code paths (launch, then
//! permanently hidden).

pub mod amounts;
pub mod field;

pub use amounts::DriveAmounts;
pub use field::{HIDDEN_POSITION, ParticleField, ParticleTransform};
