//! The particle population and its per-tick transform computation.

use atrium_config::{ParticleConfig, TimingConfig};
use atrium_math::{fibonacci_sphere_point, normalize_or_default, ring_angle, scatter_direction};
use atrium_phase::Phase;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::amounts::DriveAmounts;

/// Off-screen parking position for hidden particles.
pub const HIDDEN_POSITION: Vec3 = Vec3::new(0.0, 0.0, -100.0);

/// Computed render transform of one particle. Recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleTransform {
    /// World position.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

impl Default for ParticleTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// Fixed-size particle field.
///
/// Origins and gateway targets are immutable after construction; only the
/// transform buffer changes. The `hidden` flag is the one-way guard that
/// stops the field re-writing the degenerate transform every tick for the
/// rest of the session.
#[derive(Debug, Clone)]
pub struct ParticleField {
    origins: Vec<Vec3>,
    gateway_targets: Vec<Vec3>,
    transforms: Vec<ParticleTransform>,
    hidden: bool,
    config: ParticleConfig,
}

impl ParticleField {
    /// Lay out `config.count` particles: origins on the Fibonacci sphere,
    /// gateway targets evenly spaced on a jittered ring. Ring jitter is
    /// drawn from the seeded session RNG; scatter directions are hashed
    /// from the index and need no RNG.
    #[must_use]
    pub fn new(config: &ParticleConfig) -> Self {
        let n = config.count;
        let mut rng = SmallRng::seed_from_u64(config.seed);

        let mut origins = Vec::with_capacity(n);
        let mut gateway_targets = Vec::with_capacity(n);
        for i in 0..n {
            origins.push(fibonacci_sphere_point(i, n, config.sphere_radius));

            let angle = ring_angle(i, n);
            let radius = config.gateway_radius
                + rng.gen_range(-config.gateway_radius_jitter..=config.gateway_radius_jitter);
            let depth =
                rng.gen_range(-config.gateway_depth_jitter..=config.gateway_depth_jitter);
            gateway_targets.push(Vec3::new(angle.cos() * radius, angle.sin() * radius, depth));
        }

        let transforms = origins
            .iter()
            .map(|&position| ParticleTransform {
                position,
                scale: 1.0,
            })
            .collect();

        Self {
            origins,
            gateway_targets,
            transforms,
            hidden: false,
            config: config.clone(),
        }
    }

    /// Recompute every particle transform for this tick.
    ///
    /// `time` is total simulation time (drives the morph waves), `timer`
    /// the latched phase timer, `travel_progress` the [0, 1] travel
    /// accumulator.
    pub fn update(
        &mut self,
        phase: Phase,
        timer: f32,
        approach_progress: f32,
        travel_progress: f32,
        time: f32,
        timing: &TimingConfig,
    ) {
        match phase {
            Phase::Traveling => {
                if travel_progress < timing.launch_fraction {
                    self.hidden = false;
                    self.apply_launch(travel_progress / timing.launch_fraction);
                } else {
                    self.hide_all();
                }
            }
            Phase::Gallery => self.hide_all(),
            _ => {
                self.hidden = false;
                let amounts =
                    DriveAmounts::from_phase(phase, timer, approach_progress, timing);
                self.apply_effects(amounts, time);
            }
        }
    }

    /// Morph, dissolve, and gateway blend, composed per particle.
    fn apply_effects(&mut self, amounts: DriveAmounts, time: f32) {
        for i in 0..self.origins.len() {
            let origin = self.origins[i];
            let mut p = origin;

            if amounts.morph > 0.0 {
                let dist = origin.length();
                let wave = (origin.x * 1.5 + time * 1.3).sin() * 0.3
                    + (origin.y * 1.8 + time * 1.1).sin() * 0.3
                    + (origin.z * 1.6 + time * 1.5).sin() * 0.3
                    + (dist * 2.5 + time * 1.8).sin() * 0.4;
                let amplitude = 1.0 + amounts.morph * 2.0;
                let displacement = wave * amounts.morph * 0.4 * amplitude;
                p = origin + normalize_or_default(origin) * displacement;
            }

            // Dissolve scatters from the origin, replacing the morph.
            if amounts.dissolve > 0.0 {
                p = origin
                    + scatter_direction(i) * amounts.dissolve * self.config.dissolve_distance;
            }

            if amounts.formation > 0.0 {
                p = p.lerp(self.gateway_targets[i], amounts.formation);
            }

            self.transforms[i] = ParticleTransform {
                position: p,
                scale: 1.0,
            };
        }
    }

    /// Launch outward from the gateway ring, shrinking toward nothing.
    /// `explosion` is the sub-phase-local progress in [0, 1].
    fn apply_launch(&mut self, explosion: f32) {
        let explosion = explosion.clamp(0.0, 1.0);
        let scale = (1.0 - explosion * 2.0).max(0.01);
        for i in 0..self.gateway_targets.len() {
            let position = self.gateway_targets[i]
                + scatter_direction(i) * explosion * self.config.launch_distance;
            self.transforms[i] = ParticleTransform { position, scale };
        }
    }

    /// Park every particle at the degenerate hidden transform, once.
    fn hide_all(&mut self) {
        if self.hidden {
            return;
        }
        for transform in &mut self.transforms {
            *transform = ParticleTransform {
                position: HIDDEN_POSITION,
                scale: 0.0,
            };
        }
        self.hidden = true;
    }

    /// Number of particles. Fixed for the simulation lifetime.
    #[must_use]
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// True when the field holds no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// Whether the field is parked in the hidden state.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Current per-particle transforms.
    #[must_use]
    pub fn transforms(&self) -> &[ParticleTransform] {
        &self.transforms
    }

    /// Fixed origin of particle `i`.
    #[must_use]
    pub fn origin(&self, i: usize) -> Vec3 {
        self.origins[i]
    }

    /// Fixed gateway target of particle `i`.
    #[must_use]
    pub fn gateway_target(&self, i: usize) -> Vec3 {
        self.gateway_targets[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_field() -> ParticleField {
        let config = ParticleConfig {
            count: 64,
            ..ParticleConfig::default()
        };
        ParticleField::new(&config)
    }

    fn timing() -> TimingConfig {
        TimingConfig::default()
    }

    #[test]
    fn test_first_origin_matches_closed_form() {
        let field = small_field();
        let n = field.len();
        let radius = 5.0;
        // i = 0: theta = 0, phi = acos(1 - 1/n).
        let phi = (1.0 - 2.0 * 0.5 / n as f32).acos();
        let origin = field.origin(0);
        assert!((origin.x - radius * phi.sin()).abs() < 1e-5);
        assert!(origin.y.abs() < 1e-5);
        assert!((origin.z - radius * phi.cos()).abs() < 1e-5);
    }

    #[test]
    fn test_gateway_targets_respect_jitter_bounds() {
        let config = ParticleConfig::default();
        let field = ParticleField::new(&config);
        for i in 0..field.len() {
            let target = field.gateway_target(i);
            let planar = (target.x * target.x + target.y * target.y).sqrt();
            assert!(planar >= config.gateway_radius - config.gateway_radius_jitter - 1e-4);
            assert!(planar <= config.gateway_radius + config.gateway_radius_jitter + 1e-4);
            assert!(target.z.abs() <= config.gateway_depth_jitter + 1e-4);
        }
    }

    #[test]
    fn test_same_seed_reproduces_layout() {
        let config = ParticleConfig {
            count: 32,
            ..ParticleConfig::default()
        };
        let a = ParticleField::new(&config);
        let b = ParticleField::new(&config);
        for i in 0..a.len() {
            assert_eq!(a.gateway_target(i), b.gateway_target(i));
        }
    }

    #[test]
    fn test_sphere_at_zero_approach_rests_at_origins() {
        let mut field = small_field();
        field.update(Phase::Sphere, 0.0, 0.0, 0.0, 3.0, &timing());
        for i in 0..field.len() {
            assert_eq!(field.transforms()[i].position, field.origin(i));
            assert_eq!(field.transforms()[i].scale, 1.0);
        }
    }

    #[test]
    fn test_full_dissolve_displaces_by_scatter_distance() {
        let mut field = small_field();
        field.update(Phase::Particles, 6.0, 0.0, 0.0, 0.0, &timing());
        for i in 0..field.len() {
            let offset = field.transforms()[i].position - field.origin(i);
            assert!((offset.length() - 15.0).abs() < 1e-3, "index {i}");
        }
    }

    #[test]
    fn test_full_formation_reaches_gateway_targets() {
        let mut field = small_field();
        field.update(Phase::Gateway, 12.0, 0.0, 0.0, 0.0, &timing());
        for i in 0..field.len() {
            let d = (field.transforms()[i].position - field.gateway_target(i)).length();
            assert!(d < 1e-4, "index {i}: {d}");
        }
    }

    #[test]
    fn test_launch_moves_outward_and_shrinks() {
        let mut field = small_field();
        // Travel at half the launch window: explosion = 0.5.
        field.update(Phase::Traveling, 12.0, 0.0, 0.15, 0.0, &timing());
        for i in 0..field.len() {
            let t = field.transforms()[i];
            let offset = t.position - field.gateway_target(i);
            assert!((offset.length() - 40.0).abs() < 1e-2, "index {i}");
            assert!((t.scale - 0.01).abs() < 1e-6);
        }
        assert!(!field.is_hidden());
    }

    #[test]
    fn test_build_start_hides_particles_permanently() {
        let mut field = small_field();
        field.update(Phase::Traveling, 12.0, 0.0, 0.5, 0.0, &timing());
        assert!(field.is_hidden());
        for t in field.transforms() {
            assert_eq!(t.position, HIDDEN_POSITION);
            assert_eq!(t.scale, 0.0);
        }
        // Gallery keeps them hidden.
        field.update(Phase::Gallery, 12.0, 0.0, 1.0, 0.0, &timing());
        assert!(field.is_hidden());
    }

    #[test]
    fn test_count_is_fixed_across_updates() {
        let mut field = small_field();
        let n = field.len();
        field.update(Phase::Dissolving, 1.0, 100.0, 0.0, 1.0, &timing());
        field.update(Phase::Gallery, 12.0, 0.0, 1.0, 2.0, &timing());
        assert_eq!(field.len(), n);
        assert_eq!(field.transforms().len(), n);
    }
}
