//! Command-line argument parsing for the Atrium simulation.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Atrium command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "atrium", about = "Atrium gallery scene simulation")]
pub struct CliArgs {
    /// Particle count.
    #[arg(long)]
    pub particles: Option<usize>,

    /// RNG seed for per-session jitter.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Travel progress gained per second.
    #[arg(long)]
    pub travel_rate: Option<f32>,

    /// Log a snapshot line every N ticks (0 = off).
    #[arg(long)]
    pub snapshot_interval: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(count) = args.particles {
            self.particles.count = count;
        }
        if let Some(seed) = args.seed {
            self.particles.seed = seed;
        }
        if let Some(rate) = args.travel_rate {
            self.timing.travel_rate = rate;
        }
        if let Some(interval) = args.snapshot_interval {
            self.debug.snapshot_interval = interval;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let mut config = Config::default();
        let args = CliArgs {
            particles: Some(512),
            seed: Some(7),
            travel_rate: Some(0.06),
            snapshot_interval: None,
            log_level: Some("debug".to_string()),
            config: None,
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.particles.count, 512);
        assert_eq!(config.particles.seed, 7);
        assert!((config.timing.travel_rate - 0.06).abs() < f32::EPSILON);
        assert_eq!(config.debug.log_level, "debug");
    }

    #[test]
    fn test_absent_overrides_leave_defaults() {
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, Config::default());
    }
}
