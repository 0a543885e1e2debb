//! Input collector: folds device state into a per-tick snapshot.

use crate::keyboard::MoveKeys;
use crate::pointer::PointerState;

/// Plain-scalar view of the input state, read once per simulation tick.
///
/// Fields are written independently by the event edge, so a last-writer-
/// wins race on one field never corrupts another. The two `bool` event
/// fields are one-shot: they are true for exactly the tick following the
/// edge that raised them.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    /// Held movement directions.
    pub keys: MoveKeys,
    /// Horizontal orbit angle in radians.
    pub orbit_horizontal: f32,
    /// Vertical orbit angle in radians.
    pub orbit_vertical: f32,
    /// Approach progress in [0, 100].
    pub approach_progress: f32,
    /// The activation glyph was hit since the last tick.
    pub activate: bool,
    /// A frame was hit since the last tick.
    pub select_frame: Option<usize>,
}

/// Owns the device trackers and produces [`InputSnapshot`]s.
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    /// Keyboard movement state.
    pub keys: MoveKeys,
    /// Pointer orbit/approach state.
    pub pointer: PointerState,
    activate: bool,
    select_frame: Option<usize>,
}

impl InputCollector {
    /// Creates an idle collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the platform edge hit-tested the activation glyph
    /// successfully.
    pub fn press_activate(&mut self) {
        self.activate = true;
    }

    /// Record that the platform edge hit-tested a frame successfully.
    pub fn press_select(&mut self, frame_index: usize) {
        self.select_frame = Some(frame_index);
    }

    /// Produce the snapshot for this tick and clear one-shot events.
    /// Also settles the eased approach progress by one step.
    pub fn poll(&mut self) -> InputSnapshot {
        self.pointer.settle_approach();
        let snapshot = InputSnapshot {
            keys: self.keys,
            orbit_horizontal: self.pointer.orbit_horizontal(),
            orbit_vertical: self.pointer.orbit_vertical(),
            approach_progress: self.pointer.approach_progress(),
            activate: self.activate,
            select_frame: self.select_frame,
        };
        self.activate = false;
        self.select_frame = None;
        snapshot
    }
}
