use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use grid_snake::game::{
    GameConfig, SpeedLevel,
    config::{MAX_GRID_SIZE, MIN_GRID_SIZE},
};
use grid_snake::logging;
use grid_snake::modes::HumanMode;
use tracing::info;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a square grid, in the terminal")]
struct Cli {
    /// Board width and height (resets the starting layout to fit)
    #[arg(long, value_parser = clap::value_parser!(u16).range(MIN_GRID_SIZE as i64..=MAX_GRID_SIZE as i64))]
    grid_size: Option<u16>,

    /// Tick speed preset
    #[arg(long, value_enum)]
    speed: Option<SpeedLevel>,

    /// Explicit tick interval in milliseconds, overrides --speed
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    speed_ms: Option<u64>,

    /// JSON game configuration; command line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(size) = self.grid_size {
            config = config.resized(usize::from(size));
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
            config.speed_ms = None;
        }
        if let Some(speed_ms) = self.speed_ms {
            config.speed_ms = Some(speed_ms);
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    info!(
        grid = config.grid_size,
        speed_ms = config.speed_ms(),
        "starting grid_snake"
    );

    let mut human_mode = HumanMode::new(config)?;
    human_mode.run().await?;

    Ok(())
}
