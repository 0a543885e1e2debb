//! Fixed-timestep driver for the scene.
//!
//! Simulation runs at a fixed 60 Hz regardless of how often the caller
//! gets around to pumping it: elapsed wall time goes into an
//! accumulator and whole timesteps are drained from it. Oversized frame
//! times are clamped so a stall never snowballs into a catch-up spiral.

use std::time::Instant;
use tracing::warn;

/// Fixed simulation timestep, 60 Hz.
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Largest frame time accepted into the accumulator. Anything longer is
/// clamped and the simulation accepts the slowdown.
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Accumulator-based fixed-timestep loop.
pub struct TickLoop {
    previous: Instant,
    accumulator: f32,
    total_time: f32,
    tick_count: u64,
}

impl TickLoop {
    /// Start the loop from the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
            accumulator: 0.0,
            total_time: 0.0,
            tick_count: 0,
        }
    }

    /// Pump the loop against wall-clock time, running `step(FIXED_DT)`
    /// zero or more times. Returns how many steps ran.
    pub fn pump(&mut self, step: impl FnMut(f32)) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous).as_secs_f32();
        self.previous = now;
        if frame_time > MAX_FRAME_TIME {
            warn!(
                frame_ms = frame_time * 1000.0,
                "frame time over budget, clamping"
            );
        }
        self.pump_by(frame_time, step)
    }

    /// Pump with an explicit frame time. Scripted and test drivers use
    /// this for determinism.
    pub fn pump_by(&mut self, frame_time: f32, mut step: impl FnMut(f32)) -> u32 {
        self.accumulator += frame_time.min(MAX_FRAME_TIME);

        let mut steps = 0;
        while self.accumulator >= FIXED_DT {
            step(FIXED_DT);
            self.accumulator -= FIXED_DT;
            self.total_time += FIXED_DT;
            self.tick_count += 1;
            steps += 1;
        }
        steps
    }

    /// Total simulated seconds.
    #[must_use]
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Total simulation steps run.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Default for TickLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_timestep_runs_one_step() {
        let mut tick_loop = TickLoop::new();
        let steps = tick_loop.pump_by(FIXED_DT, |_| {});
        assert_eq!(steps, 1);
        assert!(tick_loop.accumulator.abs() < 1e-6);
    }

    #[test]
    fn test_accumulator_carries_partial_frames() {
        let mut tick_loop = TickLoop::new();
        assert_eq!(tick_loop.pump_by(FIXED_DT * 0.6, |_| {}), 0);
        assert_eq!(tick_loop.pump_by(FIXED_DT * 0.6, |_| {}), 1);
    }

    #[test]
    fn test_large_frame_runs_multiple_steps() {
        let mut tick_loop = TickLoop::new();
        let steps = tick_loop.pump_by(FIXED_DT * 3.0, |_| {});
        assert_eq!(steps, 3);
        assert_eq!(tick_loop.tick_count(), 3);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut tick_loop = TickLoop::new();
        let steps = tick_loop.pump_by(10.0, |_| {});
        let max_steps = (MAX_FRAME_TIME / FIXED_DT).ceil() as u32;
        assert!(steps <= max_steps);
        assert!(steps > 0);
    }

    #[test]
    fn test_total_time_tracks_steps() {
        let mut tick_loop = TickLoop::new();
        for _ in 0..10 {
            tick_loop.pump_by(FIXED_DT * 2.0, |_| {});
        }
        let expected = tick_loop.tick_count() as f32 * FIXED_DT;
        assert!((tick_loop.total_time() - expected).abs() < 1e-4);
    }

    #[test]
    fn test_step_receives_fixed_dt() {
        let mut tick_loop = TickLoop::new();
        tick_loop.pump_by(FIXED_DT * 4.0, |dt| {
            assert!((dt - FIXED_DT).abs() < f32::EPSILON);
        });
    }

    #[test]
    fn test_deterministic_across_identical_inputs() {
        let frame_times = [0.017, 0.015, 0.020, 0.016, 0.033, 0.008, 0.018];
        let mut a = TickLoop::new();
        let mut b = TickLoop::new();
        for &ft in &frame_times {
            a.pump_by(ft, |_| {});
            b.pump_by(ft, |_| {});
        }
        assert_eq!(a.tick_count(), b.tick_count());
        assert!((a.total_time() - b.total_time()).abs() < 1e-6);
    }
}
