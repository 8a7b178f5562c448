// main.rs - Conway's Game of Life in a fixed-size window

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use conway_engine::{LifeConfig, DEFAULT_CELL_SCALE, DEFAULT_GRID_SIZE, DEFAULT_INTERVAL_MS};
use eframe::egui;
use tracing::info;

mod app;    // eframe::App implementation
mod canvas; // Cell painting and gridline cache

use app::LifeApp;

#[derive(Debug, Parser)]
#[command(name = "game_of_life", about = "Conway's Game of Life on a fixed square grid")]
struct Args {
    /// Cells per side of the grid
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Pixels per cell
    #[arg(long, default_value_t = DEFAULT_CELL_SCALE)]
    scale: f32,

    /// Initial step interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS)]
    speed: u64,
}

impl Args {
    fn into_config(self) -> LifeConfig {
        LifeConfig {
            grid_size: self.size,
            cell_scale: self.scale,
            default_interval_ms: self.speed,
            ..LifeConfig::default()
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = Args::parse().into_config();
    config.validate()?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start the tick runtime")?;

    let extent = config.cell_scale * config.grid_size as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([(extent + 40.0).max(760.0), extent + 190.0])
            .with_resizable(false),
        ..Default::default()
    };

    info!(size = config.grid_size, scale = config.cell_scale, "opening window");
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Box::new(LifeApp::new(cc, runtime, config))),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
