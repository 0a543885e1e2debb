//! One wall/ceiling block and its build animation.

use atrium_math::ease_in_out;
use glam::Vec3;
use rand::Rng;
use rand::rngs::SmallRng;

/// Immutable per-block build schedule, sampled once on first use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildSchedule {
    /// Build-progress value at which this block starts rising, in [0, 0.5).
    pub start: f32,
    /// Build-progress span the rise takes, in [0.15, 0.35).
    pub duration: f32,
}

impl BuildSchedule {
    fn sample(rng: &mut SmallRng) -> Self {
        Self {
            start: rng.gen_range(0.0..0.5),
            duration: rng.gen_range(0.15..0.35),
        }
    }
}

/// A single block of the room shell.
#[derive(Debug, Clone)]
pub struct Block {
    /// Grid coordinate within the shell layout.
    pub grid: (i32, i32, i32),
    /// Final resting position.
    pub final_position: Vec3,
    /// Lazily sampled build schedule. `None` until first consulted.
    schedule: Option<BuildSchedule>,
    /// One-way flag: the placeholder material has been swapped out.
    built: bool,
    /// Current animated position.
    pub position: Vec3,
    /// Current uniform scale (0 before the rise starts, 1 once built).
    pub scale: f32,
    /// Outline opacity, fading to zero as the block finishes.
    pub outline_opacity: f32,
}

impl Block {
    /// Create a block resting unbuilt on the floor plane.
    #[must_use]
    pub fn new(grid: (i32, i32, i32), final_position: Vec3, floor_y: f32) -> Self {
        Self {
            grid,
            final_position,
            schedule: None,
            built: false,
            position: Vec3::new(final_position.x, floor_y, final_position.z),
            scale: 0.0,
            outline_opacity: 1.0,
        }
    }

    /// Advance the block against the global build-progress scalar.
    ///
    /// The schedule is sampled on the first call and immutable after.
    /// Local progress is `clamp((build - start) / duration, 0, 1)` through
    /// the quadratic ease-in/out; it is non-decreasing as long as `build`
    /// is. The material swap at local progress >= 0.5 happens once.
    pub fn advance(&mut self, build: f32, floor_y: f32, rng: &mut SmallRng) {
        let schedule = *self
            .schedule
            .get_or_insert_with(|| BuildSchedule::sample(rng));

        let local = ((build - schedule.start) / schedule.duration).clamp(0.0, 1.0);
        let eased = ease_in_out(local);

        self.position.y = floor_y + (self.final_position.y - floor_y) * eased;
        self.scale = eased;
        self.outline_opacity = 1.0 - local;

        if local >= 0.5 {
            self.mark_built();
        }
    }

    /// Swap the placeholder material for the final one. Idempotent and
    /// irreversible.
    pub fn mark_built(&mut self) {
        self.built = true;
    }

    /// Whether the material swap has happened.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.built
    }

    /// The sampled schedule, if the block has been consulted yet.
    #[must_use]
    pub fn schedule(&self) -> Option<BuildSchedule> {
        self.schedule
    }
}
