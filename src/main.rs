use anyhow::{Context, Result, ensure};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use torus_snake::game::SimConfig;
use torus_snake::modes::PlayMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snakes chasing an apple on a wrapping playfield")]
struct Cli {
    /// Number of local players (arrows steer player 1, WASD player 2)
    #[arg(long, default_value = "1")]
    players: usize,

    /// Playfield width
    #[arg(long)]
    width: Option<i32>,

    /// Playfield height
    #[arg(long)]
    height: Option<i32>,

    /// Simulation frames per second
    #[arg(long, default_value = "60")]
    fps: u32,

    /// JSON file with simulation settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    ensure!(
        (1..=2).contains(&cli.players),
        "only 1 or 2 local players are supported (got {})",
        cli.players
    );

    // The terminal belongs to the UI, so logs only go to a file
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    // Create simulation configuration from file and CLI arguments
    let mut config = match &cli.config {
        Some(path) => SimConfig::from_json_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }

    let mut play_mode = PlayMode::new(config, cli.players, cli.fps)?;
    play_mode.run().await?;

    Ok(())
}
