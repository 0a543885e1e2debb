//! Pointer tracker: drag-to-orbit and scroll-to-approach.
//!
//! [`PointerState`] accumulates winit pointer events and maintains the two
//! orbit angles plus the approach-progress target that the camera and
//! phase machine read. Scroll deltas nudge a target progress; the
//! displayed progress eases toward it so a wheel flick does not jump the
//! scene.

use glam::Vec2;
use std::f32::consts::FRAC_PI_4;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Radians of orbit per pixel of drag.
const ORBIT_SENSITIVITY: f32 = 0.005;

/// Approach progress per scroll line.
const SCROLL_GAIN: f32 = 0.8;

/// Per-tick easing of displayed approach progress toward its target.
const APPROACH_SMOOTHING: f32 = 0.1;

/// Pointer-driven orbit and approach state.
#[derive(Debug, Clone)]
pub struct PointerState {
    position: Vec2,
    last_drag_position: Vec2,
    dragging: bool,
    orbit_horizontal: f32,
    orbit_vertical: f32,
    approach_target: f32,
    approach_progress: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerState {
    /// Creates a pointer state at rest: no drag, zero angles, zero approach.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            last_drag_position: Vec2::ZERO,
            dragging: false,
            orbit_horizontal: 0.0,
            orbit_vertical: 0.0,
            approach_target: 0.0,
            approach_progress: 0.0,
        }
    }

    /// Process a cursor-moved event. While a drag is active the delta
    /// rotates the orbit angles; vertical is clamped to +/- pi/4.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let new_pos = Vec2::new(x as f32, y as f32);
        if self.dragging {
            let delta = new_pos - self.last_drag_position;
            self.orbit_horizontal -= delta.x * ORBIT_SENSITIVITY;
            self.orbit_vertical = (self.orbit_vertical - delta.y * ORBIT_SENSITIVITY)
                .clamp(-FRAC_PI_4, FRAC_PI_4);
            self.last_drag_position = new_pos;
        }
        self.position = new_pos;
    }

    /// Process a mouse button event. The primary button starts/stops a drag.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                self.dragging = true;
                self.last_drag_position = self.position;
            }
            ElementState::Released => {
                self.dragging = false;
            }
        }
    }

    /// Process a scroll event, nudging the approach target. Pixel deltas
    /// are normalized at ~40 px per line. Target stays in [0, 100].
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_x, y) => y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y / 40.0) as f32,
        };
        self.approach_target = (self.approach_target + lines * SCROLL_GAIN).clamp(0.0, 100.0);
    }

    /// Ease displayed approach progress toward its target. Called once
    /// per tick by the collector.
    pub fn settle_approach(&mut self) {
        self.approach_progress +=
            (self.approach_target - self.approach_progress) * APPROACH_SMOOTHING;
    }

    /// Current cursor position in window-logical coordinates.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Horizontal orbit angle in radians.
    #[must_use]
    pub fn orbit_horizontal(&self) -> f32 {
        self.orbit_horizontal
    }

    /// Vertical orbit angle in radians, clamped to +/- pi/4.
    #[must_use]
    pub fn orbit_vertical(&self) -> f32 {
        self.orbit_vertical
    }

    /// Displayed approach progress in [0, 100].
    #[must_use]
    pub fn approach_progress(&self) -> f32 {
        self.approach_progress
    }

    /// Force approach progress and its target (used by scripted drivers).
    pub fn set_approach(&mut self, value: f32) {
        let value = value.clamp(0.0, 100.0);
        self.approach_target = value;
        self.approach_progress = value;
    }
}
