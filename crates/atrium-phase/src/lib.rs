//! Phase state machine: the single source of truth every other
//! simulation component reads.
//!
//! The scene progresses through a fixed sequence of phases. Before the
//! commit latch is set the machine may fall back to [`Phase::Sphere`];
//! once the dissolve has begun the sequence only moves forward, driven by
//! elapsed-time thresholds, an external activation event, and the travel
//! accumulator.

use atrium_config::TimingConfig;
use tracing::info;

/// Visual phase of the scene. Ordered: a later variant is strictly
/// further along the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Idle particle sphere, morphing with approach progress.
    Sphere,
    /// Particles scattering along their hashed directions.
    Dissolving,
    /// Fully scattered cloud.
    Particles,
    /// Cloud converging onto the gateway ring.
    FormingGateway,
    /// Stable ring awaiting activation.
    Gateway,
    /// Scripted transition: particle launch, then structure build.
    Traveling,
    /// Interactive gallery. Terminal for the session.
    Gallery,
}

/// Phase machine with timers and the one-way commit latch.
#[derive(Debug, Clone)]
pub struct PhaseMachine {
    phase: Phase,
    timer: f32,
    latched: bool,
    travel_progress: f32,
    timing: TimingConfig,
}

impl PhaseMachine {
    /// Creates a machine resting in [`Phase::Sphere`].
    #[must_use]
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            phase: Phase::Sphere,
            timer: 0.0,
            latched: false,
            travel_progress: 0.0,
            timing,
        }
    }

    /// Advance one tick.
    ///
    /// `approach_progress` is the external [0, 100] scalar; `activate` is
    /// the gateway glyph hit event. Returns the phase entered this tick,
    /// if any. At most one transition fires per tick.
    pub fn advance(&mut self, dt: f32, approach_progress: f32, activate: bool) -> Option<Phase> {
        let approach = approach_progress.clamp(0.0, 100.0);

        match self.phase {
            Phase::Gallery => None,
            Phase::Traveling => {
                self.travel_progress = (self.travel_progress + dt * self.timing.travel_rate).min(1.0);
                if self.travel_progress >= 1.0 {
                    self.enter(Phase::Gallery)
                } else {
                    None
                }
            }
            Phase::Gateway if activate => {
                // Activation is an event, never a timer.
                self.travel_progress = 0.0;
                self.enter(Phase::Traveling)
            }
            _ => {
                if approach >= self.timing.commit_threshold {
                    self.latched = true;
                }
                if self.latched {
                    self.timer += dt;
                    let target = self.timed_phase();
                    // The latch forbids moving backward even if the timer
                    // mapping ever disagreed with the current phase.
                    if target > self.phase {
                        self.enter(target)
                    } else {
                        None
                    }
                } else {
                    self.timer = 0.0;
                    if self.phase != Phase::Sphere {
                        self.enter(Phase::Sphere)
                    } else {
                        None
                    }
                }
            }
        }
    }

    /// Phase dictated by the latched timer.
    fn timed_phase(&self) -> Phase {
        if self.timer < self.timing.dissolve_end {
            Phase::Dissolving
        } else if self.timer < self.timing.forming_start {
            Phase::Particles
        } else if self.timer < self.timing.gateway_start {
            Phase::FormingGateway
        } else {
            Phase::Gateway
        }
    }

    fn enter(&mut self, next: Phase) -> Option<Phase> {
        info!(from = ?self.phase, to = ?next, timer = self.timer, "phase transition");
        self.phase = next;
        Some(next)
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds elapsed since the commit latch was set.
    #[must_use]
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Whether the commit latch has been set.
    #[must_use]
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Travel progress in [0, 1]. Zero outside the travel sequence.
    #[must_use]
    pub fn travel_progress(&self) -> f32 {
        self.travel_progress
    }

    /// Timing constants this machine runs with.
    #[must_use]
    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn machine() -> PhaseMachine {
        PhaseMachine::new(TimingConfig::default())
    }

    /// Run for `seconds` of simulated time at full approach.
    fn run_latched(m: &mut PhaseMachine, seconds: f32) {
        let ticks = (seconds / DT).round() as usize;
        for _ in 0..ticks {
            m.advance(DT, 100.0, false);
        }
    }

    #[test]
    fn test_starts_in_sphere() {
        assert_eq!(machine().phase(), Phase::Sphere);
        assert!(!machine().is_latched());
    }

    #[test]
    fn test_low_approach_stays_in_sphere() {
        let mut m = machine();
        for _ in 0..600 {
            assert_eq!(m.advance(DT, 50.0, false), None);
        }
        assert_eq!(m.phase(), Phase::Sphere);
        assert_eq!(m.timer(), 0.0);
    }

    #[test]
    fn test_commit_threshold_latches_and_dissolves() {
        let mut m = machine();
        let entered = m.advance(DT, 99.5, false);
        assert_eq!(entered, Some(Phase::Dissolving));
        assert!(m.is_latched());
    }

    #[test]
    fn test_timer_thresholds_drive_sequence() {
        let mut m = machine();
        run_latched(&mut m, 1.0);
        assert_eq!(m.phase(), Phase::Dissolving);
        run_latched(&mut m, 5.0);
        assert_eq!(m.phase(), Phase::Particles);
        run_latched(&mut m, 3.0);
        assert_eq!(m.phase(), Phase::FormingGateway);
        run_latched(&mut m, 3.0);
        assert_eq!(m.phase(), Phase::Gateway);
    }

    #[test]
    fn test_latch_ignores_approach_dropping() {
        let mut m = machine();
        run_latched(&mut m, 1.0);
        assert_eq!(m.phase(), Phase::Dissolving);
        // Approach collapses to zero; phase keeps marching forward.
        for _ in 0..(12.0 / DT) as usize {
            m.advance(DT, 0.0, false);
        }
        assert_eq!(m.phase(), Phase::Gateway);
    }

    #[test]
    fn test_unlatched_reversal_resets_timer() {
        let mut m = machine();
        // Never reaches the threshold, so a later drop keeps Sphere.
        m.advance(DT, 98.0, false);
        assert_eq!(m.phase(), Phase::Sphere);
        assert!(!m.is_latched());
        assert_eq!(m.timer(), 0.0);
    }

    #[test]
    fn test_phase_is_monotonic_once_latched() {
        let mut m = machine();
        let mut previous = m.phase();
        m.advance(DT, 100.0, false);
        for tick in 0..4000 {
            // Noise on every input after latching.
            let approach = if tick % 2 == 0 { 0.0 } else { 100.0 };
            m.advance(DT, approach, tick % 7 == 0);
            assert!(m.phase() >= previous, "reversed at tick {tick}");
            previous = m.phase();
        }
    }

    #[test]
    fn test_activation_only_fires_in_gateway() {
        let mut m = machine();
        assert_eq!(m.advance(DT, 0.0, true), None);
        assert_eq!(m.phase(), Phase::Sphere);

        run_latched(&mut m, 12.0);
        assert_eq!(m.phase(), Phase::Gateway);
        // Gateway never advances on a timer alone.
        run_latched(&mut m, 30.0);
        assert_eq!(m.phase(), Phase::Gateway);

        assert_eq!(m.advance(DT, 100.0, true), Some(Phase::Traveling));
        assert_eq!(m.travel_progress(), 0.0);
    }

    #[test]
    fn test_travel_accumulates_to_gallery() {
        let mut m = machine();
        run_latched(&mut m, 12.0);
        m.advance(DT, 100.0, true);
        assert_eq!(m.phase(), Phase::Traveling);

        let mut entered_gallery = false;
        // 0.03/s needs ~33.4 s of travel.
        for _ in 0..(40.0 / DT) as usize {
            if m.advance(DT, 100.0, false) == Some(Phase::Gallery) {
                entered_gallery = true;
                break;
            }
        }
        assert!(entered_gallery);
        assert_eq!(m.travel_progress(), 1.0);
    }

    #[test]
    fn test_gallery_is_terminal() {
        let mut m = machine();
        run_latched(&mut m, 12.0);
        m.advance(DT, 100.0, true);
        run_latched(&mut m, 40.0);
        assert_eq!(m.phase(), Phase::Gallery);
        for _ in 0..600 {
            assert_eq!(m.advance(DT, 0.0, true), None);
        }
        assert_eq!(m.phase(), Phase::Gallery);
    }

    #[test]
    fn test_phase_ordering_matches_sequence() {
        assert!(Phase::Sphere < Phase::Dissolving);
        assert!(Phase::Dissolving < Phase::Particles);
        assert!(Phase::Particles < Phase::FormingGateway);
        assert!(Phase::FormingGateway < Phase::Gateway);
        assert!(Phase::Gateway < Phase::Traveling);
        assert!(Phase::Traveling < Phase::Gallery);
    }
}
