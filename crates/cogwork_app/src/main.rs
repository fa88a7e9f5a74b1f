//! Cogwork — an analog clock rendered with wgpu.
//!
//! Two procedural gears spin on the face while the second, minute and hour
//! hands rotate at 1, 1/60 and 1/3600 radians per second of run time. An
//! optional glTF mesh (first mesh, first primitive) can be placed behind the
//! face via the config file.
//!
//! Usage: `cogwork [config.toml]` — with no argument, `cogwork.toml` is used
//! when present, otherwise built-in defaults.

mod config;
mod graphics;
mod runner;

use std::path::PathBuf;

use config::AppConfig;
use runner::ClockApp;

fn main() -> anyhow::Result<()> {
    setup_logging()?;

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load_or_default(config_path.as_deref())?;
    log::info!(
        "starting {} ({}x{}, vsync {})",
        config.title,
        config.width,
        config.height,
        config.vsync
    );

    ClockApp::run(config)
}

fn setup_logging() -> anyhow::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        // wgpu internals are chatty at info level
        .level_for("wgpu_core", log::LevelFilter::Warn)
        .level_for("wgpu_hal", log::LevelFilter::Warn)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
