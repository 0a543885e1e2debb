//! The scene: one struct owning the whole simulation state.
//!
//! Components advance in a fixed order every tick: input scalars feed
//! the phase machine, the phase drives the particle field, then exactly
//! one of the mode branches (orbit, travel, gallery) runs, and finally
//! artwork deliveries are folded in. Events produced along the way are
//! queued for the caller to drain.

use atrium_assets::{ArtProvider, ArtStore, LoadTracker};
use atrium_camera::{CameraMode, CameraPose, CameraRig};
use atrium_config::Config;
use atrium_input::InputSnapshot;
use atrium_interact::ProximityDetector;
use atrium_particles::ParticleField;
use atrium_phase::{Phase, PhaseMachine};
use atrium_player::{CharacterController, TravelRise};
use atrium_structure::{Room, build_progress};
use glam::Vec3;
use tracing::info;

/// Things that happened during a tick, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// The phase machine entered a new phase.
    PhaseChanged(Phase),
    /// A frame was selected for viewing.
    FrameSelected(usize),
}

/// Cheap copyable view of the scene state after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSnapshot {
    /// Current phase.
    pub phase: Phase,
    /// Seconds since the commit latch was set.
    pub phase_timer: f32,
    /// Approach progress in [0, 100].
    pub approach_progress: f32,
    /// Travel progress in [0, 1].
    pub travel_progress: f32,
    /// Avatar position.
    pub character_position: Vec3,
    /// Camera pose.
    pub camera: CameraPose,
    /// Nearest in-range frame, if any.
    pub nearby_frame: Option<usize>,
    /// Frame currently selected for viewing, if any.
    pub active_selection: Option<usize>,
    /// Whether the art gate is open (all loaded or timed out).
    pub art_ready: bool,
}

/// The full simulation.
pub struct Scene {
    config: Config,
    phase_machine: PhaseMachine,
    particles: ParticleField,
    room: Room,
    character: CharacterController,
    camera: CameraRig,
    proximity: ProximityDetector,
    art: ArtStore,
    art_tracker: LoadTracker,
    provider: Box<dyn ArtProvider>,
    time: f32,
    approach_progress: f32,
    active_selection: Option<usize>,
    pending_activate: bool,
    pending_select: Option<usize>,
    events: Vec<SceneEvent>,
}

impl Scene {
    /// Build the scene and queue an art request for every frame.
    #[must_use]
    pub fn new(config: Config, mut provider: Box<dyn ArtProvider>) -> Self {
        let phase_machine = PhaseMachine::new(config.timing.clone());
        let particles = ParticleField::new(&config.particles);
        let room = Room::generate(&config.room, &config.frames, config.particles.seed);
        let character = CharacterController::new(&config.movement);
        let camera = CameraRig::new(&config.camera);
        let proximity = ProximityDetector::new(&config.interaction);

        let frame_count = room.frames().len();
        for index in 0..frame_count {
            provider.request(index);
        }
        info!(
            particles = particles.len(),
            frames = frame_count,
            "scene constructed"
        );

        Self {
            config,
            phase_machine,
            particles,
            room,
            character,
            camera,
            proximity,
            art: ArtStore::new(frame_count),
            art_tracker: LoadTracker::new(frame_count),
            provider,
            time: 0.0,
            approach_progress: 0.0,
            active_selection: None,
            pending_activate: false,
            pending_select: None,
            events: Vec::new(),
        }
    }

    /// Queue a gateway activation for the next tick, as if the glyph had
    /// been hit. Ignored until the art gate is open.
    pub fn activate(&mut self) {
        self.pending_activate = true;
    }

    /// Queue a frame selection for the next tick.
    pub fn select_frame(&mut self, index: usize) {
        self.pending_select = Some(index);
    }

    /// Close the active selection.
    pub fn clear_selection(&mut self) {
        self.active_selection = None;
    }

    /// Advance the whole simulation by `dt` seconds.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) -> SceneSnapshot {
        let dt = dt.min(self.config.timing.max_delta);
        self.time += dt;
        self.approach_progress = input.approach_progress;

        self.poll_art(dt);

        let requested_activate = std::mem::take(&mut self.pending_activate) || input.activate;
        let activate = requested_activate && self.art_tracker.is_ready();
        let entered = self
            .phase_machine
            .advance(dt, input.approach_progress, activate);
        if let Some(phase) = entered {
            self.events.push(SceneEvent::PhaseChanged(phase));
            if phase == Phase::Gallery {
                // Snap the build shut before the fade begins.
                self.room.advance_build(1.0);
                self.room.reset_transition();
            }
        }

        let phase = self.phase_machine.phase();
        let travel = self.phase_machine.travel_progress();
        self.particles.update(
            phase,
            self.phase_machine.timer(),
            input.approach_progress,
            travel,
            self.time,
            &self.config.timing,
        );

        match phase {
            Phase::Traveling => self.tick_travel(travel),
            Phase::Gallery => self.tick_gallery(input, dt),
            _ => {
                self.camera.set_mode(CameraMode::Orbit);
                self.camera.update_orbit(
                    input.orbit_horizontal,
                    input.orbit_vertical,
                    input.approach_progress,
                );
            }
        }

        // Selections cannot queue up outside the gallery.
        if phase != Phase::Gallery {
            self.pending_select = None;
        }

        self.snapshot()
    }

    fn tick_travel(&mut self, travel: f32) {
        let build = build_progress(travel, &self.config.timing);
        if build > 0.0 {
            self.room.advance_build(build);
            TravelRise.advance(&mut self.character, build);
        }
        self.camera.set_mode(CameraMode::Travel);
        self.camera
            .update_travel(build, self.config.timing.camera_hold_fraction);
    }

    fn tick_gallery(&mut self, input: &InputSnapshot, dt: f32) {
        self.room
            .advance_transition(dt, self.config.timing.transition_rate);

        let bounds = self.room.bounds();
        self.character
            .step(&input.keys, input.orbit_horizontal, &bounds, self.room.frames());

        self.proximity
            .update(self.character.position(), self.time, self.room.frames_mut());

        // Selection only lands on the frame the avatar is actually near.
        let requested = input.select_frame.or(std::mem::take(&mut self.pending_select));
        if let Some(index) = requested
            && self.proximity.nearby_frame() == Some(index)
            && self.active_selection != Some(index)
        {
            self.active_selection = Some(index);
            self.events.push(SceneEvent::FrameSelected(index));
        }

        self.camera.set_mode(CameraMode::Follow);
        self.camera
            .update_follow(self.character.position(), input.orbit_horizontal, &bounds);
    }

    fn poll_art(&mut self, dt: f32) {
        self.art_tracker.tick(dt);
        for delivery in self.provider.poll() {
            self.art_tracker.mark_resolved(delivery.index);
            self.art.apply(delivery);
        }
    }

    /// Drain the events produced since the last call, in order.
    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current state as a copyable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            phase: self.phase_machine.phase(),
            phase_timer: self.phase_machine.timer(),
            approach_progress: self.approach_progress,
            travel_progress: self.phase_machine.travel_progress(),
            character_position: self.character.position(),
            camera: self.camera.pose(),
            nearby_frame: self.proximity.nearby_frame(),
            active_selection: self.active_selection,
            art_ready: self.art_tracker.is_ready(),
        }
    }

    /// The particle field.
    #[must_use]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// The room.
    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// The artwork store.
    #[must_use]
    pub fn art(&self) -> &ArtStore {
        &self.art
    }

    /// The configuration the scene runs with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
