//! Scripted headless session driver.
//!
//! Plays the whole journey through the scene the way a user would:
//! scroll the approach to full, let the dissolve sequence run, hit the
//! gateway glyph, ride the travel transition, then walk the gallery
//! until a frame lights up and select it.

use tracing::info;

use atrium_input::InputCollector;
use atrium_phase::Phase;
use atrium_scene::{FIXED_DT, Scene, SceneSnapshot, TickLoop};

/// Simulated-seconds cap per stage before the session is declared stuck.
const STAGE_CAP_SECONDS: f32 = 120.0;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session stalled during {stage} after {seconds:.0}s")]
    Stalled { stage: &'static str, seconds: f32 },
}

/// What the session did, for the exit log line.
pub struct SessionSummary {
    pub ticks: u64,
    pub selected_frame: Option<usize>,
}

/// The per-stage driver state.
struct Driver {
    scene: Scene,
    collector: InputCollector,
    tick_loop: TickLoop,
    last: SceneSnapshot,
}

impl Driver {
    fn new(scene: Scene) -> Self {
        let last = scene.snapshot();
        Self {
            scene,
            collector: InputCollector::new(),
            tick_loop: TickLoop::new(),
            last,
        }
    }

    /// Step one fixed tick and log events and periodic snapshots.
    fn step(&mut self) {
        let scene = &mut self.scene;
        let collector = &mut self.collector;
        let last = &mut self.last;
        self.tick_loop.pump_by(FIXED_DT, |dt| {
            let input = collector.poll();
            *last = scene.tick(&input, dt);
        });

        for event in self.scene.drain_events() {
            info!(?event, tick = self.tick_loop.tick_count(), "scene event");
        }

        let interval = self.scene.config().debug.snapshot_interval;
        if interval > 0 && self.tick_loop.tick_count() % u64::from(interval) == 0 {
            info!(
                phase = ?self.last.phase,
                approach = self.last.approach_progress,
                travel = self.last.travel_progress,
                position = ?self.last.character_position,
                "snapshot"
            );
        }
    }

    /// Step until `done` or the stage cap runs out.
    fn drive_until(
        &mut self,
        stage: &'static str,
        mut done: impl FnMut(&SceneSnapshot) -> bool,
    ) -> Result<(), SessionError> {
        let cap = (STAGE_CAP_SECONDS / FIXED_DT) as u32;
        for _ in 0..cap {
            self.step();
            if done(&self.last) {
                info!(stage, "stage complete");
                return Ok(());
            }
        }
        Err(SessionError::Stalled {
            stage,
            seconds: STAGE_CAP_SECONDS,
        })
    }
}

/// Run the scripted session to completion.
pub fn run(scene: Scene) -> Result<SessionSummary, SessionError> {
    let mut driver = Driver::new(scene);

    driver.collector.pointer.set_approach(100.0);
    driver.drive_until("approach", |snap| snap.phase == Phase::Gateway)?;

    driver.collector.press_activate();
    driver.drive_until("activation", |snap| snap.phase == Phase::Traveling)?;

    driver.drive_until("travel", |snap| snap.phase == Phase::Gallery)?;

    // Walk toward the back wall until a frame comes into range.
    driver.collector.keys.backward = true;
    driver.drive_until("walk", |snap| snap.nearby_frame.is_some())?;
    driver.collector.keys.release_all();

    let nearby = driver.last.nearby_frame;
    if let Some(index) = nearby {
        driver.collector.press_select(index);
        driver.drive_until("selection", |snap| snap.active_selection == Some(index))?;
    }

    Ok(SessionSummary {
        ticks: driver.tick_loop.tick_count(),
        selected_frame: driver.last.active_selection,
    })
}
