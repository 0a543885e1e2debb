//! Movement key tracker.
//!
//! [`MoveKeys`] reduces winit keyboard events to the six held movement
//! directions the character controller consumes. Physical key codes are
//! used so WASD works identically regardless of keyboard layout; arrow
//! keys alias the planar directions.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Held state of the six movement directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    /// Move toward the camera's facing direction.
    pub forward: bool,
    /// Move away from the camera's facing direction.
    pub backward: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
    /// Rise.
    pub ascend: bool,
    /// Sink.
    pub descend: bool,
}

impl MoveKeys {
    /// Processes a winit [`KeyEvent`]. Keys that map to no movement
    /// direction are ignored; repeats collapse into the held state.
    pub fn process_event(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        self.process_code(code, event.state);
    }

    /// Processes a bare key code (platform-independent, test-friendly).
    pub fn process_code(&mut self, code: KeyCode, state: ElementState) {
        let held = state == ElementState::Pressed;
        match code {
            KeyCode::KeyW | KeyCode::ArrowUp => self.forward = held,
            KeyCode::KeyS | KeyCode::ArrowDown => self.backward = held,
            KeyCode::KeyA | KeyCode::ArrowLeft => self.left = held,
            KeyCode::KeyD | KeyCode::ArrowRight => self.right = held,
            KeyCode::Space => self.ascend = held,
            KeyCode::ShiftLeft | KeyCode::ShiftRight => self.descend = held,
            _ => {}
        }
    }

    /// True if any movement direction is held.
    #[must_use]
    pub fn any_held(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.ascend || self.descend
    }

    /// Releases every direction (e.g., on focus loss).
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}
