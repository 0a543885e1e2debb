//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Particle field settings.
    pub particles: ParticleConfig,
    /// Room geometry settings.
    pub room: RoomConfig,
    /// Picture frame layout settings.
    pub frames: FrameLayoutConfig,
    /// Character locomotion settings.
    pub movement: MovementConfig,
    /// Camera rig settings.
    pub camera: CameraConfig,
    /// Frame proximity/interaction settings.
    pub interaction: InteractionConfig,
    /// Phase timing and progression rates.
    pub timing: TimingConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Particle field configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    /// Number of particles. Fixed for the simulation's lifetime.
    pub count: usize,
    /// Radius of the initial Fibonacci sphere.
    pub sphere_radius: f32,
    /// Nominal radius of the gateway ring formation.
    pub gateway_radius: f32,
    /// Per-particle radial jitter on the gateway ring (half-range).
    pub gateway_radius_jitter: f32,
    /// Per-particle depth jitter on the gateway ring (half-range).
    pub gateway_depth_jitter: f32,
    /// Scatter displacement at full dissolve.
    pub dissolve_distance: f32,
    /// Scatter displacement at full launch during travel.
    pub launch_distance: f32,
    /// RNG seed for the gateway ring jitter.
    pub seed: u64,
}

/// Room geometry configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoomConfig {
    /// Interior width along x.
    pub width: f32,
    /// Interior height along y.
    pub height: f32,
    /// Interior depth along z.
    pub depth: f32,
    /// Edge length of one wall/ceiling block.
    pub block_size: f32,
    /// Y coordinate of the floor plane blocks rise from.
    pub floor_y: f32,
}

/// Picture frame layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FrameLayoutConfig {
    /// Frame rows per wall.
    pub rows: usize,
    /// Frame columns per wall (the two end columns are skipped).
    pub cols: usize,
    /// Frame width.
    pub width: f32,
    /// Frame height.
    pub height: f32,
    /// Vertical spacing between rows.
    pub vertical_spacing: f32,
    /// Distance the top row is pushed down from the ceiling line.
    pub top_offset: f32,
    /// Inset of the frame plane from the wall surface.
    pub wall_inset: f32,
}

/// Character locomotion configuration. Rates are per fixed 60 Hz tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovementConfig {
    /// Acceleration added per tick per held direction.
    pub acceleration: f32,
    /// Multiplicative velocity decay per tick.
    pub friction: f32,
    /// Horizontal speed cap (vector length).
    pub max_speed: f32,
    /// Inset of the walkable box from the room walls.
    pub boundary_margin: f32,
    /// Character body radius used for vertical bounds.
    pub body_radius: f32,
    /// Character radius used against frame footprints.
    pub collision_radius: f32,
    /// Extra padding around a frame's half-extents.
    pub frame_padding: f32,
    /// Collision depth of a frame along its facing axis.
    pub frame_depth: f32,
}

/// Camera rig configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Orbit distance at zero approach progress.
    pub orbit_far: f32,
    /// Distance shed across the full approach range.
    pub orbit_travel: f32,
    /// Focal point the orbit and travel modes look at.
    pub focal_point: [f32; 3],
    /// Exponential smoothing factor applied each tick.
    pub smoothing: f32,
    /// Follow distance behind the character.
    pub follow_distance: f32,
    /// Follow height above the character.
    pub follow_height: f32,
    /// Look-ahead distance in front of the character.
    pub look_ahead: f32,
    /// Inset of the camera box from the room walls (smaller than the
    /// character's margin).
    pub room_margin: f32,
}

/// Frame proximity/interaction configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InteractionConfig {
    /// Interaction radius around a frame.
    pub radius: f32,
    /// Peak glow intensity scale.
    pub glow_scale: f32,
    /// Exponential smoothing toward the target glow per tick.
    pub glow_smoothing: f32,
    /// Multiplicative glow decay per tick once out of range.
    pub glow_decay: f32,
    /// Glow below this snaps to exactly zero.
    pub glow_epsilon: f32,
    /// Coarse pre-filter distance for the per-frame scan.
    pub prefilter_distance: f32,
}

/// Phase timing and progression rates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Approach progress at which the dissolve commits (out of 100).
    pub commit_threshold: f32,
    /// Seconds of dissolving before the particles phase.
    pub dissolve_end: f32,
    /// Seconds at which the gateway starts forming.
    pub forming_start: f32,
    /// Seconds at which the gateway is fully formed.
    pub gateway_start: f32,
    /// Travel progress gained per second.
    pub travel_rate: f32,
    /// Fraction of travel spent on the particle launch.
    pub launch_fraction: f32,
    /// Fraction of travel the structure build completes within.
    pub build_fraction: f32,
    /// Fraction of the build during which the camera holds still.
    pub camera_hold_fraction: f32,
    /// Room transition progress gained per second in the gallery.
    pub transition_rate: f32,
    /// Maximum delta time accepted by one tick.
    pub max_delta: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log a snapshot line every N ticks (0 = off).
    pub snapshot_interval: u32,
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 4000,
            sphere_radius: 5.0,
            gateway_radius: 4.0,
            gateway_radius_jitter: 0.4,
            gateway_depth_jitter: 0.15,
            dissolve_distance: 15.0,
            launch_distance: 80.0,
            seed: 0x5EED,
        }
    }
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: 50.0,
            height: 30.0,
            depth: 50.0,
            block_size: 2.0,
            floor_y: -15.0,
        }
    }
}

impl Default for FrameLayoutConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 10,
            width: 1.8,
            height: 3.2,
            vertical_spacing: 5.2,
            top_offset: 2.0,
            wall_inset: 1.2,
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            acceleration: 0.008,
            friction: 0.92,
            max_speed: 0.08,
            boundary_margin: 3.0,
            body_radius: 1.0,
            collision_radius: 1.5,
            frame_padding: 0.3,
            frame_depth: 0.8,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orbit_far: 40.0,
            orbit_travel: 37.0,
            focal_point: [0.0, 0.0, -10.0],
            smoothing: 0.1,
            follow_distance: 8.0,
            follow_height: 3.0,
            look_ahead: 3.0,
            room_margin: 2.0,
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            radius: 4.0,
            glow_scale: 0.4,
            glow_smoothing: 0.15,
            glow_decay: 0.85,
            glow_epsilon: 0.01,
            prefilter_distance: 22.5,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            commit_threshold: 99.0,
            dissolve_end: 5.0,
            forming_start: 8.0,
            gateway_start: 11.0,
            travel_rate: 0.03,
            launch_fraction: 0.3,
            build_fraction: 0.65,
            camera_hold_fraction: 0.2,
            transition_rate: 0.3,
            max_delta: 0.1,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            snapshot_interval: 0,
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
