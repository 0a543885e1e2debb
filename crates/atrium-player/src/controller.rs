//! Kinematic character controller for the gallery.
//!
//! Movement is camera-relative: held keys accelerate along the camera's
//! flattened forward/right axes, friction decays the velocity every tick,
//! and speed is capped before integration. Collision is resolved in two
//! stages per tick: clamp to the walkable interior box, then push out of
//! any picture-frame footprint along the frame's facing axis.

use atrium_config::MovementConfig;
use atrium_input::MoveKeys;
use atrium_math::Aabb;
use atrium_structure::FrameRegistry;
use glam::Vec3;

/// Spawn position the avatar waits at below the room, hidden.
const SPAWN_POSITION: Vec3 = Vec3::new(0.0, -12.0, 0.0);

/// Coarse Manhattan-distance cutoff for the per-frame collision scan.
const COLLISION_PREFILTER: f32 = 7.5;

/// The player avatar's kinematic state.
#[derive(Debug, Clone)]
pub struct CharacterController {
    position: Vec3,
    velocity: Vec3,
    visible: bool,
    config: MovementConfig,
}

impl CharacterController {
    /// Create the avatar at its hidden spawn point below the room.
    #[must_use]
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            position: SPAWN_POSITION,
            velocity: Vec3::ZERO,
            visible: false,
            config: config.clone(),
        }
    }

    /// One locomotion tick: accelerate from held keys, apply friction and
    /// speed caps, integrate, then resolve room and frame collisions.
    ///
    /// `orbit_horizontal` is the camera's horizontal orbit angle; forward
    /// is the camera's view direction flattened onto the ground plane.
    pub fn step(
        &mut self,
        keys: &MoveKeys,
        orbit_horizontal: f32,
        room_bounds: &Aabb,
        frames: &FrameRegistry,
    ) {
        let acc = self.config.acceleration;
        let forward = Vec3::new(orbit_horizontal.sin(), 0.0, orbit_horizontal.cos());
        let right = Vec3::new(forward.z, 0.0, -forward.x);

        if keys.forward {
            self.velocity += forward * acc;
        }
        if keys.backward {
            self.velocity -= forward * acc;
        }
        if keys.left {
            self.velocity += right * acc;
        }
        if keys.right {
            self.velocity -= right * acc;
        }
        if keys.ascend {
            self.velocity.y += acc;
        }
        if keys.descend {
            self.velocity.y -= acc;
        }

        self.velocity *= self.config.friction;

        let max_speed = self.config.max_speed;
        let horizontal_speed = (self.velocity.x * self.velocity.x
            + self.velocity.z * self.velocity.z)
            .sqrt();
        if horizontal_speed > max_speed {
            let scale = max_speed / horizontal_speed;
            self.velocity.x *= scale;
            self.velocity.z *= scale;
        }
        self.velocity.y = self.velocity.y.clamp(-max_speed, max_speed);

        let mut next = self.position + self.velocity;
        next = self.clamp_to_room(next, room_bounds);
        next = self.collide_frames(next, frames);
        self.position = next;
    }

    /// Clamp a candidate position into the walkable interior box: the
    /// configured margin off each wall, one block of clearance plus the
    /// body radius off floor and ceiling.
    fn clamp_to_room(&self, candidate: Vec3, bounds: &Aabb) -> Vec3 {
        let margin = self.config.boundary_margin;
        let vertical = 1.0 + self.config.body_radius;
        bounds
            .shrink_by(Vec3::new(margin, vertical, margin))
            .clamp_point(candidate)
    }

    /// Push the candidate position out of any frame footprint it entered,
    /// along the frame's facing axis, zeroing that velocity component.
    fn collide_frames(&mut self, mut candidate: Vec3, frames: &FrameRegistry) -> Vec3 {
        let layout = frames.layout();
        let half_width = layout.width / 2.0 + self.config.frame_padding;
        let half_height = layout.height / 2.0 + self.config.frame_padding;
        let reach = self.config.frame_depth + self.config.collision_radius;

        for frame in frames.frames() {
            let delta = candidate - frame.position;
            if delta.x.abs() + delta.y.abs() + delta.z.abs() > COLLISION_PREFILTER {
                continue;
            }

            // The footprint extends `reach` along the facing axis and
            // `half_width` along the wall.
            let half = if frame.facing.faces_z() {
                Vec3::new(half_width, half_height, reach)
            } else {
                Vec3::new(reach, half_height, half_width)
            };
            let footprint = Aabb::from_center_half_extents(frame.position, half);
            if !footprint.contains_point(candidate) {
                continue;
            }

            if frame.facing.faces_z() {
                candidate.z = if delta.z > 0.0 {
                    frame.position.z + reach
                } else {
                    frame.position.z - reach
                };
                self.velocity.z = 0.0;
            } else {
                candidate.x = if delta.x > 0.0 {
                    frame.position.x + reach
                } else {
                    frame.position.x - reach
                };
                self.velocity.x = 0.0;
            }
        }
        candidate
    }

    /// Place the avatar directly. Used by the scripted travel rise.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Reveal the avatar. One-way.
    pub fn reveal(&mut self) {
        self.visible = true;
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Whether the avatar has been revealed yet.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
