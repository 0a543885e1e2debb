//! Configuration system for the Atrium gallery simulation.
//!
//! Provides runtime-configurable tuning constants that persist to disk as
//! RON files. Supports CLI overrides via clap, hot-reload detection, and
//! forward/backward compatible serialization.
//!
//! The numeric defaults are the canonical tuning set; anything worth
//! disputing lives here rather than hard-coded at its use site.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraConfig, Config, DebugConfig, FrameLayoutConfig, InteractionConfig, MovementConfig,
    ParticleConfig, RoomConfig, TimingConfig,
};
pub use error::ConfigError;
