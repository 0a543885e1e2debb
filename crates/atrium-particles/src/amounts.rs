//! Displacement amounts derived from phase and timer.

use atrium_config::TimingConfig;
use atrium_phase::Phase;

/// Scalar weights of the three pre-travel displacement effects.
///
/// All fields stay in [0, 1]. Exactly which are nonzero depends on the
/// phase: morph only in `Sphere`, dissolve ramping through
/// `Dissolving`/`Particles` and back down through `FormingGateway`,
/// formation ramping up through `FormingGateway` and holding in
/// `Gateway`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DriveAmounts {
    /// Sine-wave morph weight (approach progress / 100).
    pub morph: f32,
    /// Scatter displacement weight.
    pub dissolve: f32,
    /// Gateway blend weight.
    pub formation: f32,
}

impl DriveAmounts {
    /// Compute the amounts for the given phase and latched timer.
    ///
    /// `Traveling` and `Gallery` return all zeroes; those phases use the
    /// launch/hidden code paths instead of effect composition.
    #[must_use]
    pub fn from_phase(
        phase: Phase,
        timer: f32,
        approach_progress: f32,
        timing: &TimingConfig,
    ) -> Self {
        match phase {
            Phase::Sphere => Self {
                morph: (approach_progress / 100.0).clamp(0.0, 1.0),
                ..Self::default()
            },
            Phase::Dissolving => Self {
                dissolve: (timer / timing.dissolve_end).min(1.0),
                ..Self::default()
            },
            Phase::Particles => Self {
                dissolve: 1.0,
                ..Self::default()
            },
            Phase::FormingGateway => {
                let window = timing.gateway_start - timing.forming_start;
                let progress = ((timer - timing.forming_start) / window).clamp(0.0, 1.0);
                Self {
                    morph: 0.0,
                    dissolve: 1.0 - progress,
                    formation: progress,
                }
            }
            Phase::Gateway => Self {
                formation: 1.0,
                ..Self::default()
            },
            Phase::Traveling | Phase::Gallery => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> TimingConfig {
        TimingConfig::default()
    }

    #[test]
    fn test_sphere_morph_tracks_approach() {
        let a = DriveAmounts::from_phase(Phase::Sphere, 0.0, 65.0, &timing());
        assert!((a.morph - 0.65).abs() < 1e-6);
        assert_eq!(a.dissolve, 0.0);
        assert_eq!(a.formation, 0.0);
    }

    #[test]
    fn test_dissolve_ramps_over_window() {
        let a = DriveAmounts::from_phase(Phase::Dissolving, 2.5, 100.0, &timing());
        assert!((a.dissolve - 0.5).abs() < 1e-6);
        let b = DriveAmounts::from_phase(Phase::Dissolving, 99.0, 100.0, &timing());
        assert!((b.dissolve - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_particles_holds_full_dissolve() {
        let a = DriveAmounts::from_phase(Phase::Particles, 6.0, 0.0, &timing());
        assert_eq!(a.dissolve, 1.0);
        assert_eq!(a.morph, 0.0);
    }

    #[test]
    fn test_forming_crossfades_dissolve_into_formation() {
        let a = DriveAmounts::from_phase(Phase::FormingGateway, 9.5, 0.0, &timing());
        assert!((a.dissolve - 0.5).abs() < 1e-6);
        assert!((a.formation - 0.5).abs() < 1e-6);
        // Sums to one across the whole window.
        assert!((a.dissolve + a.formation - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_gateway_is_fully_formed() {
        let a = DriveAmounts::from_phase(Phase::Gateway, 20.0, 0.0, &timing());
        assert_eq!(a.formation, 1.0);
        assert_eq!(a.dissolve, 0.0);
    }

    #[test]
    fn test_travel_and_gallery_are_inert() {
        for phase in [Phase::Traveling, Phase::Gallery] {
            assert_eq!(
                DriveAmounts::from_phase(phase, 50.0, 100.0, &timing()),
                DriveAmounts::default()
            );
        }
    }
}
