mod game;
mod player;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use joystick_keys::{JoystickSettings, PressMode};
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use game::GameState;

/// On-screen joystick demo: drag a handle, get arrow key signals
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML joystick settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log every press/release the joysticks emit
    #[arg(long)]
    debug: bool,

    /// When press signals fire while a direction is held
    #[arg(long, value_enum)]
    press_mode: Option<PressMode>,

    /// Track diameter in pixels
    #[arg(long)]
    diameter: Option<f32>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "🕹️ Joystick Keys".to_owned(),
        window_width: 1280,
        window_height: 720,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    // Press/release diagnostics are emitted at debug level
    let level = if args.debug { "debug" } else { args.log_level.as_str() };
    if let Err(e) = init_logging(level) {
        eprintln!("failed to initialize logging: {e:#}");
    }

    let mut game = match load_settings(&args).and_then(|settings| {
        GameState::new(&settings).context("failed to create joysticks")
    }) {
        Ok(game) => game,
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    };

    info!("Starting joystick demo...");

    loop {
        let dt = get_frame_time();

        game.update(dt);
        game.draw();

        next_frame().await
    }
}

fn load_settings(args: &Args) -> Result<JoystickSettings> {
    let mut settings = match &args.config {
        Some(path) => {
            info!("Configuration file: {}", path.display());
            JoystickSettings::load(path)?
        }
        None => JoystickSettings::default(),
    };

    // Command line flags win over the file
    if args.debug {
        settings.enable_debug = true;
    }
    if let Some(mode) = args.press_mode {
        settings.press_mode = mode;
    }
    if let Some(diameter) = args.diameter {
        settings.diameter = diameter;
    }
    settings.validate().context("invalid joystick settings")?;

    Ok(settings)
}

fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("invalid log level")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false),
        )
        .try_init()?;

    Ok(())
}
