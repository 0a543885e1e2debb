//! Frame proximity detection and glow animation.
//!
//! Each tick the detector scans the frame registry against the avatar's
//! position. Frames inside the interaction radius glow toward a
//! distance-scaled target intensity and pick up a subtle scale pulse;
//! everything else decays multiplicatively and snaps to zero below an
//! epsilon. The nearest in-range frame becomes the selection candidate.

use atrium_config::InteractionConfig;
use atrium_math::approach;
use atrium_structure::FrameRegistry;
use glam::Vec3;
use tracing::debug;

/// Scale-pulse amplitude at full glow intensity.
const PULSE_AMPLITUDE: f32 = 0.02;
/// Scale-pulse angular frequency in radians per second.
const PULSE_FREQUENCY: f32 = 4.0;

/// Scans frames around the avatar and animates their glow state.
#[derive(Debug, Clone)]
pub struct ProximityDetector {
    config: InteractionConfig,
    nearby_frame: Option<usize>,
}

impl ProximityDetector {
    #[must_use]
    pub fn new(config: &InteractionConfig) -> Self {
        Self {
            config: config.clone(),
            nearby_frame: None,
        }
    }

    /// One proximity tick. Mutates per-frame glow and pulse state and
    /// returns the new nearby frame if the candidate changed.
    ///
    /// `time` is the elapsed simulation time driving the pulse.
    pub fn update(
        &mut self,
        avatar: Vec3,
        time: f32,
        frames: &mut FrameRegistry,
    ) -> Option<Option<usize>> {
        let radius = self.config.radius;
        let mut closest: Option<(usize, f32)> = None;

        for frame in frames.frames_mut() {
            let delta = avatar - frame.position;
            let rough = delta.x.abs() + delta.y.abs() + delta.z.abs();
            if rough > self.config.prefilter_distance {
                Self::decay(frame, &self.config);
                continue;
            }

            let dist = delta.length();
            if dist < radius {
                let intensity = 1.0 - dist / radius;
                let target = intensity * self.config.glow_scale;
                frame.glow = approach(frame.glow, target, self.config.glow_smoothing);
                frame.scale_pulse =
                    1.0 + (time * PULSE_FREQUENCY).sin() * PULSE_AMPLITUDE * intensity;

                if closest.is_none_or(|(_, best)| dist < best) {
                    closest = Some((frame.index, dist));
                }
            } else {
                Self::decay(frame, &self.config);
            }
        }

        let candidate = closest.map(|(index, _)| index);
        if candidate != self.nearby_frame {
            debug!(from = ?self.nearby_frame, to = ?candidate, "nearby frame changed");
            self.nearby_frame = candidate;
            Some(candidate)
        } else {
            None
        }
    }

    fn decay(frame: &mut atrium_structure::Frame, config: &InteractionConfig) {
        if frame.glow > config.glow_epsilon {
            frame.glow *= config.glow_decay;
            if frame.glow < config.glow_epsilon {
                frame.glow = 0.0;
            }
        } else {
            frame.glow = 0.0;
        }
        frame.scale_pulse = 1.0;
    }

    /// The current nearest in-range frame, if any.
    #[must_use]
    pub fn nearby_frame(&self) -> Option<usize> {
        self.nearby_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_config::{FrameLayoutConfig, RoomConfig};
    use atrium_structure::Room;

    fn setup() -> (ProximityDetector, Room) {
        let room = Room::generate(&RoomConfig::default(), &FrameLayoutConfig::default(), 11);
        (ProximityDetector::new(&InteractionConfig::default()), room)
    }

    // Registry ordering puts back-wall frames first, so stepping +z from
    // one of those moves into the room.
    fn near(frame_position: Vec3, offset: f32) -> Vec3 {
        frame_position + Vec3::new(0.0, 0.0, offset)
    }

    #[test]
    fn test_frame_in_range_glows_toward_target() {
        let (mut detector, mut room) = setup();
        let target = room.frames().frames()[0].position;
        let avatar = near(target, 1.0);
        for _ in 0..200 {
            detector.update(avatar, 0.0, room.frames_mut());
        }
        let frame = &room.frames().frames()[0];
        let dist = (avatar - frame.position).length();
        let expected = (1.0 - dist / 4.0) * 0.4;
        assert!((frame.glow - expected).abs() < 1e-3);
    }

    #[test]
    fn test_nearest_frame_becomes_candidate() {
        let (mut detector, mut room) = setup();
        let target = room.frames().frames()[5].position;
        let event = detector.update(near(target, 1.0), 0.0, room.frames_mut());
        assert_eq!(event, Some(Some(5)));
        assert_eq!(detector.nearby_frame(), Some(5));
    }

    #[test]
    fn test_candidate_change_fires_once() {
        let (mut detector, mut room) = setup();
        let target = room.frames().frames()[5].position;
        let avatar = near(target, 1.0);
        assert!(detector.update(avatar, 0.0, room.frames_mut()).is_some());
        assert!(detector.update(avatar, 0.0, room.frames_mut()).is_none());
    }

    #[test]
    fn test_out_of_range_glow_decays_to_zero() {
        let (mut detector, mut room) = setup();
        let target = room.frames().frames()[0].position;
        let avatar = near(target, 1.0);
        for _ in 0..50 {
            detector.update(avatar, 0.0, room.frames_mut());
        }
        assert!(room.frames().frames()[0].glow > 0.1);

        let far = Vec3::new(0.0, -5.0, 0.0);
        let event = detector.update(far, 0.0, room.frames_mut());
        assert_eq!(event, Some(None));
        for _ in 0..100 {
            detector.update(far, 0.0, room.frames_mut());
        }
        assert_eq!(room.frames().frames()[0].glow, 0.0);
        assert_eq!(room.frames().frames()[0].scale_pulse, 1.0);
    }

    #[test]
    fn test_glow_snaps_below_epsilon() {
        let (mut detector, mut room) = setup();
        room.frames_mut().frames_mut()[0].glow = 0.011;
        detector.update(Vec3::new(0.0, -5.0, 0.0), 0.0, room.frames_mut());
        assert_eq!(room.frames().frames()[0].glow, 0.0);
    }

    #[test]
    fn test_pulse_tracks_time() {
        let (mut detector, mut room) = setup();
        let target = room.frames().frames()[0].position;
        let avatar = near(target, 0.5);
        detector.update(avatar, 0.0, room.frames_mut());
        let at_zero = room.frames().frames()[0].scale_pulse;
        detector.update(avatar, 0.4, room.frames_mut());
        let later = room.frames().frames()[0].scale_pulse;
        assert_ne!(at_zero, later);
        assert!((later - 1.0).abs() <= 0.02 + 1e-6);
    }

    #[test]
    fn test_far_frames_never_touched() {
        let (mut detector, mut room) = setup();
        detector.update(Vec3::new(0.0, -5.0, 0.0), 0.0, room.frames_mut());
        for frame in room.frames().frames() {
            assert_eq!(frame.glow, 0.0);
            assert_eq!(frame.scale_pulse, 1.0);
        }
    }
}
