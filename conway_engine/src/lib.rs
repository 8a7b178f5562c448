// lib.rs - Conway's Game of Life engine, independent of any windowing toolkit

mod config;
mod driver;
mod engine;
mod error;
mod grid;
mod input;
mod intent;
pub mod patterns;

pub use config::{
    LifeConfig, DEFAULT_CELL_SCALE, DEFAULT_GRID_SIZE, DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS,
    MIN_INTERVAL_MS,
};
pub use driver::{spawn_ticker, SharedEngine};
pub use engine::SimulationEngine;
pub use error::{ConfigError, LifeError};
pub use grid::Grid;
pub use input::{CanvasGeometry, InputTranslator};
pub use intent::{Intent, RunState};
