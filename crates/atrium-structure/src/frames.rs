//! Interactive picture-frame registry.
//!
//! The layout is generated once: a grid of frames per wall with the two
//! end columns skipped so nothing sits in a corner. Indices are assigned
//! wall by wall and are the stable identity used for selection, asset
//! resolution, and collision.

use atrium_config::{FrameLayoutConfig, RoomConfig};
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

/// Which wall a frame hangs on, i.e. which axis it faces along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallFacing {
    /// Wall at -z, frame faces +z.
    Back,
    /// Wall at +z, frame faces -z.
    Front,
    /// Wall at -x, frame faces +x.
    Left,
    /// Wall at +x, frame faces -x.
    Right,
}

impl WallFacing {
    /// Yaw rotation of the frame plane in radians.
    #[must_use]
    pub fn rotation_y(&self) -> f32 {
        match self {
            WallFacing::Back => 0.0,
            WallFacing::Front => PI,
            WallFacing::Left => FRAC_PI_2,
            WallFacing::Right => -FRAC_PI_2,
        }
    }

    /// True for walls whose frames face along the z axis. Matches the
    /// |sin(rotation)| < 0.5 orientation test.
    #[must_use]
    pub fn faces_z(&self) -> bool {
        self.rotation_y().sin().abs() < 0.5
    }
}

/// One picture frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Stable index used for selection identity.
    pub index: usize,
    /// Center position.
    pub position: Vec3,
    /// Wall orientation.
    pub facing: WallFacing,
    /// Glow intensity in [0, 1]. Mutated by the proximity detector.
    pub glow: f32,
    /// Scale-pulse factor around 1.0. Mutated by the proximity detector.
    pub scale_pulse: f32,
}

/// All frames in the room. Count is fixed after generation.
#[derive(Debug, Clone)]
pub struct FrameRegistry {
    frames: Vec<Frame>,
    layout: FrameLayoutConfig,
}

impl FrameRegistry {
    /// Generate the wall-by-wall layout: Back, Front, Left, Right.
    #[must_use]
    pub fn generate(room: &RoomConfig, layout: &FrameLayoutConfig) -> Self {
        let wall_height = room.height - 2.0 * room.block_size;
        let start_y = wall_height / 2.0 - layout.top_offset;

        let mut frames = Vec::new();
        let mut index = 0;
        // The across extent is the room dimension the wall runs along:
        // the +-z walls span the width, the +-x walls span the depth.
        let walls = [
            (WallFacing::Back, -room.depth / 2.0 + layout.wall_inset, room.width),
            (WallFacing::Front, room.depth / 2.0 - layout.wall_inset, room.width),
            (WallFacing::Left, -room.width / 2.0 + layout.wall_inset, room.depth),
            (WallFacing::Right, room.width / 2.0 - layout.wall_inset, room.depth),
        ];

        for (facing, plane, extent) in walls {
            let wall_width = extent - 2.0 * room.block_size;
            let spacing = wall_width / (layout.cols - 1) as f32;
            let start_across = -wall_width / 2.0;
            for row in 0..layout.rows {
                for col in 0..layout.cols {
                    // End columns stay empty to keep frames out of corners.
                    if col == 0 || col == layout.cols - 1 {
                        continue;
                    }
                    let across = start_across + col as f32 * spacing;
                    let y = start_y - row as f32 * layout.vertical_spacing;
                    let position = if facing.faces_z() {
                        Vec3::new(across, y, plane)
                    } else {
                        Vec3::new(plane, y, across)
                    };
                    frames.push(Frame {
                        index,
                        position,
                        facing,
                        glow: 0.0,
                        scale_pulse: 1.0,
                    });
                    index += 1;
                }
            }
        }

        Self {
            frames,
            layout: layout.clone(),
        }
    }

    /// Number of frames. Fixed after generation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when the registry holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Immutable view of all frames.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Mutable view for the proximity detector.
    pub fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    /// Frame by stable index, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Layout constants this registry was generated with.
    #[must_use]
    pub fn layout(&self) -> &FrameLayoutConfig {
        &self.layout
    }
}

/// Frame opacity as a function of the room transition scalar: the fade
/// starts at 30% of the transition and completes at 100%.
#[must_use]
pub fn frame_opacity(transition_progress: f32) -> f32 {
    ((transition_progress - 0.3) / 0.7).clamp(0.0, 1.0)
}
