//! Atrium — headless gallery scene simulation.
//!
//! Loads configuration, wires up logging, then drives the scene through
//! a scripted session: approach the sphere, wait out the dissolve,
//! activate the gateway, travel into the gallery, and walk up to a
//! frame. Every phase transition and selection is logged; snapshot
//! lines can be enabled with `--snapshot-interval`.
//!
//! Run with: `cargo run -p atrium-game`

mod session;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use atrium_assets::DirectoryProvider;
use atrium_config::{CliArgs, Config};
use atrium_scene::Scene;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| PathBuf::from("."));
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    atrium_log::init_logging(Some(&config_dir.join("logs")), cfg!(debug_assertions), Some(&config));

    info!(
        particles = config.particles.count,
        room = format!("{}x{}x{}", config.room.width, config.room.height, config.room.depth),
        travel_rate = config.timing.travel_rate,
        "atrium starting"
    );

    let provider = DirectoryProvider::new(config_dir.join("art"));
    let scene = Scene::new(config, Box::new(provider));

    match session::run(scene) {
        Ok(summary) => info!(
            ticks = summary.ticks,
            selected_frame = ?summary.selected_frame,
            "session complete"
        ),
        Err(err) => error!("session failed: {err}"),
    }
}
