//! Scripted avatar rise during the travel transition.
//!
//! While the room builds, the avatar is not player-controlled: it rises
//! from its hidden spawn to its gallery rest height on the quadratic
//! ease, pinned to the room center, and is revealed part-way up.

use atrium_math::ease_in_out;
use glam::Vec3;

use crate::CharacterController;

/// Rest height the rise ends at.
const REST_Y: f32 = -5.0;
/// Start height of the rise (the hidden spawn height).
const START_Y: f32 = -12.0;
/// Build progress at which the avatar becomes visible.
const REVEAL_BUILD: f32 = 0.3;

/// Drives the avatar through the scripted rise.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelRise;

impl TravelRise {
    /// Advance the rise against the global build-progress scalar.
    pub fn advance(self, character: &mut CharacterController, build: f32) {
        let eased = ease_in_out(build);
        character.set_position(Vec3::new(0.0, START_Y + (REST_Y - START_Y) * eased, 0.0));
        if build >= REVEAL_BUILD && !character.is_visible() {
            character.reveal();
        }
    }
}
