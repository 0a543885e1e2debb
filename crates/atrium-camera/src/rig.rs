//! The camera rig and its three drive modes.

use atrium_config::CameraConfig;
use atrium_math::{Aabb, approach_vec3, ease_in_out};
use glam::Vec3;
use tracing::debug;

/// Travel dolly start position.
const TRAVEL_START: Vec3 = Vec3::new(0.0, 0.0, 3.0);
/// Travel dolly end position, behind and below the risen avatar.
const TRAVEL_END: Vec3 = Vec3::new(0.0, -2.0, -8.0);
/// Look target at the end of the dolly, ahead of the avatar.
const TRAVEL_LOOK_END: Vec3 = Vec3::new(0.0, -5.0, 3.0);

/// Which system drives the camera this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Orbit the focal point, distance driven by approach progress.
    Orbit,
    /// Scripted hold-then-dolly during the room build.
    Travel,
    /// Trail the avatar through the gallery.
    Follow,
}

/// A camera position plus the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space camera position.
    pub position: Vec3,
    /// World-space look-at target.
    pub look_at: Vec3,
}

/// The camera rig. Holds the smoothed pose and the active mode.
#[derive(Debug, Clone)]
pub struct CameraRig {
    position: Vec3,
    look_at: Vec3,
    mode: CameraMode,
    config: CameraConfig,
}

impl CameraRig {
    /// Create the rig in orbit mode at the zero-approach distance.
    #[must_use]
    pub fn new(config: &CameraConfig) -> Self {
        let focal = Vec3::from(config.focal_point);
        let radius = (config.orbit_far - focal.z).abs();
        Self {
            position: Vec3::new(0.0, 0.0, radius + focal.z),
            look_at: focal,
            mode: CameraMode::Orbit,
            config: config.clone(),
        }
    }

    /// Switch drive modes. No-op when already in the requested mode.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, "camera mode switch");
            self.mode = mode;
        }
    }

    /// Orbit tick: circle the focal point at the approach-driven radius,
    /// smoothing position while looking straight at the focal point.
    pub fn update_orbit(&mut self, orbit_horizontal: f32, orbit_vertical: f32, approach: f32) {
        let focal = Vec3::from(self.config.focal_point);
        let distance = self.config.orbit_far - self.config.orbit_travel * (approach / 100.0);
        let radius = (distance - focal.z).abs();

        let target = Vec3::new(
            radius * orbit_horizontal.sin(),
            radius * orbit_vertical.sin(),
            radius * orbit_horizontal.cos() + focal.z,
        );
        self.position = approach_vec3(self.position, target, self.config.smoothing);
        self.look_at = focal;
    }

    /// Travel tick against the global build-progress scalar.
    ///
    /// Before the build starts the pose is frozen on the focal point.
    /// While the build is below `hold_fraction` the camera snaps to the
    /// dolly start; the rest of the build runs the eased dolly, blending
    /// the look target from the focal point to a spot ahead of the
    /// avatar.
    pub fn update_travel(&mut self, build: f32, hold_fraction: f32) {
        let focal = Vec3::from(self.config.focal_point);
        if build <= 0.0 {
            self.look_at = focal;
            return;
        }
        let hold = hold_fraction.clamp(0.0, 0.99);
        if build < hold {
            self.position = TRAVEL_START;
            self.look_at = focal;
            return;
        }

        let move_progress = (build - hold) / (1.0 - hold);
        let eased = ease_in_out(move_progress);
        self.position = TRAVEL_START + (TRAVEL_END - TRAVEL_START) * eased;
        self.look_at = focal + (TRAVEL_LOOK_END - focal) * eased;
    }

    /// Follow tick: trail the avatar at the configured distance and
    /// height, clamped into the room, with an unsmoothed look-ahead.
    pub fn update_follow(&mut self, avatar: Vec3, orbit_horizontal: f32, bounds: &Aabb) {
        let forward = Vec3::new(orbit_horizontal.sin(), 0.0, orbit_horizontal.cos());
        let target = avatar - forward * self.config.follow_distance
            + Vec3::Y * self.config.follow_height;

        let margin = self.config.room_margin;
        let interior = bounds.shrink_by(Vec3::new(margin, 1.0 + margin, margin));
        let clamped = interior.clamp_point(target);

        self.position = approach_vec3(self.position, clamped, self.config.smoothing);
        self.look_at = avatar + forward * self.config.look_ahead;
    }

    /// Active drive mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Current smoothed pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            look_at: self.look_at,
        }
    }
}
