//! The room: block shell, frame registry, and transition scalars.

use atrium_config::{FrameLayoutConfig, RoomConfig, TimingConfig};
use atrium_math::Aabb;
use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

use crate::block::Block;
use crate::frames::FrameRegistry;

/// Global build progress derived from travel progress: zero until the
/// launch window ends, reaching one `build_fraction` of travel later.
#[must_use]
pub fn build_progress(travel_progress: f32, timing: &TimingConfig) -> f32 {
    ((travel_progress - timing.launch_fraction) / timing.build_fraction).clamp(0.0, 1.0)
}

/// The procedurally built room.
///
/// The block grid and frame layout are generated exactly once; afterwards
/// only animation state changes.
#[derive(Debug, Clone)]
pub struct Room {
    config: RoomConfig,
    blocks: Vec<Block>,
    frames: FrameRegistry,
    rng: SmallRng,
    transition_progress: f32,
    backdrop_blend: f32,
}

impl Room {
    /// Generate the block shell (four walls layer by layer, then a full
    /// ceiling) and the frame layout.
    #[must_use]
    pub fn generate(
        config: &RoomConfig,
        layout: &FrameLayoutConfig,
        seed: u64,
    ) -> Self {
        let block = config.block_size;
        let half_w = config.width / 2.0;
        let half_d = config.depth / 2.0;
        let floor = config.floor_y;
        let ceiling = floor + config.height;

        let cols_x = (config.width / block).round() as i32;
        let cols_z = (config.depth / block).round() as i32;
        let layers = (config.height / block).round() as i32;

        let mut blocks = Vec::new();
        for j in 0..layers {
            let y = floor + j as f32 * block;
            for i in 0..=cols_x {
                let x = -half_w + i as f32 * block;
                blocks.push(Block::new((i, j, 0), Vec3::new(x, y, -half_d), floor));
                blocks.push(Block::new((i, j, cols_z), Vec3::new(x, y, half_d), floor));
            }
            for k in 1..cols_z {
                let z = -half_d + k as f32 * block;
                blocks.push(Block::new((0, j, k), Vec3::new(-half_w, y, z), floor));
                blocks.push(Block::new((cols_x, j, k), Vec3::new(half_w, y, z), floor));
            }
        }
        for i in 0..=cols_x {
            let x = -half_w + i as f32 * block;
            for k in 0..=cols_z {
                let z = -half_d + k as f32 * block;
                blocks.push(Block::new((i, layers, k), Vec3::new(x, ceiling, z), floor));
            }
        }

        let frames = FrameRegistry::generate(config, layout);
        info!(
            blocks = blocks.len(),
            frames = frames.len(),
            "room layout generated"
        );

        Self {
            config: config.clone(),
            blocks,
            frames,
            rng: SmallRng::seed_from_u64(seed ^ 0x9E37_79B9),
            transition_progress: 0.0,
            backdrop_blend: 0.0,
        }
    }

    /// Animate every block against the global build-progress scalar and
    /// blend the backdrop toward the gallery tone.
    pub fn advance_build(&mut self, build: f32) {
        let floor = self.config.floor_y;
        for block in &mut self.blocks {
            block.advance(build, floor, &mut self.rng);
        }
        self.backdrop_blend = build.clamp(0.0, 1.0);
    }

    /// Advance the room transition scalar (gallery fade-in), capped at 1.
    pub fn advance_transition(&mut self, dt: f32, rate: f32) {
        self.transition_progress = (self.transition_progress + dt * rate).min(1.0);
    }

    /// Reset the transition scalar. Called once on gallery entry.
    pub fn reset_transition(&mut self) {
        self.transition_progress = 0.0;
    }

    /// Room transition scalar in [0, 1]. Also the gallery light blend.
    #[must_use]
    pub fn transition_progress(&self) -> f32 {
        self.transition_progress
    }

    /// Backdrop blend in [0, 1], driven by build progress.
    #[must_use]
    pub fn backdrop_blend(&self) -> f32 {
        self.backdrop_blend
    }

    /// Interior bounds of the room.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let half_w = self.config.width / 2.0;
        let half_d = self.config.depth / 2.0;
        Aabb::new(
            Vec3::new(-half_w, self.config.floor_y, -half_d),
            Vec3::new(half_w, self.config.floor_y + self.config.height, half_d),
        )
    }

    /// The block shell.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The frame registry.
    #[must_use]
    pub fn frames(&self) -> &FrameRegistry {
        &self.frames
    }

    /// Mutable frame registry for the proximity detector.
    pub fn frames_mut(&mut self) -> &mut FrameRegistry {
        &mut self.frames
    }

    /// Geometry constants this room was generated with.
    #[must_use]
    pub fn config(&self) -> &RoomConfig {
        &self.config
    }
}
