// engine.rs - Grid ownership plus the run/stop state machine

use std::time::Duration;

use tracing::{debug, info, trace, warn};

use crate::{patterns, Grid, Intent, LifeConfig, LifeError, RunState};

/// Owns the grid and decides when it changes.
///
/// The engine never schedules anything itself: a driver calls
/// [`SimulationEngine::step`] while [`SimulationEngine::is_running`] holds.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    grid: Grid,
    run_state: RunState,
    step_interval: Duration,
    generation: u64,
    run_epoch: u64,
    config: LifeConfig,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::with_config(LifeConfig::default())
    }
}

impl SimulationEngine {
    /// Engine over an all-dead `size x size` grid with default speed bounds.
    pub fn new(size: usize) -> Self {
        Self::with_config(LifeConfig {
            grid_size: size,
            ..LifeConfig::default()
        })
    }

    pub fn with_config(config: LifeConfig) -> Self {
        Self {
            grid: Grid::new(config.grid_size),
            run_state: RunState::Stopped,
            step_interval: config.clamp_interval(config.default_interval_ms),
            generation: 0,
            run_epoch: 0,
            config,
        }
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn current_grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Count of Stopped/Running transitions so far.
    pub fn run_epoch(&self) -> u64 {
        self.run_epoch
    }

    /// Flips a cell and returns its new state.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool, LifeError> {
        self.grid.toggle(row, col).inspect_err(|err| {
            warn!(%err, "rejected toggle");
        })
    }

    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<(), LifeError> {
        self.grid.set(row, col, alive).inspect_err(|err| {
            warn!(%err, "rejected paint");
        })
    }

    /// Advances exactly one generation.
    pub fn step(&mut self) {
        self.grid = self.grid.successor();
        self.generation += 1;
        trace!(generation = self.generation, live = self.grid.live_count(), "stepped");
    }

    pub fn play(&mut self) {
        if self.run_state != RunState::Running {
            info!(interval_ms = self.step_interval.as_millis() as u64, "simulation running");
            self.run_epoch += 1;
        }
        self.run_state = RunState::Running;
    }

    pub fn stop(&mut self) {
        if self.run_state != RunState::Stopped {
            info!(generation = self.generation, "simulation stopped");
            self.run_epoch += 1;
        }
        self.run_state = RunState::Stopped;
    }

    /// Stores the clamped interval and returns it.
    pub fn set_speed(&mut self, millis: u64) -> Duration {
        self.step_interval = self.config.clamp_interval(millis);
        debug!(
            requested_ms = millis,
            interval_ms = self.step_interval.as_millis() as u64,
            "step interval changed"
        );
        self.step_interval
    }

    /// Kills every cell. The run state is left alone.
    pub fn clear(&mut self) {
        self.grid = Grid::new(self.config.grid_size);
        self.generation = 0;
        info!("grid cleared");
    }

    pub fn load_pattern(&mut self, index: usize) -> Result<(), LifeError> {
        let pattern = patterns::PATTERNS
            .get(index)
            .ok_or(LifeError::UnknownPattern(index))?;
        patterns::apply_pattern(&mut self.grid, pattern);
        self.generation = 0;
        info!(pattern = pattern.name, "pattern loaded");
        Ok(())
    }

    pub fn randomize(&mut self, seed: u64) {
        patterns::apply_random_pattern(&mut self.grid, seed);
        self.generation = 0;
        info!(seed, live = self.grid.live_count(), "grid randomized");
    }

    pub fn apply(&mut self, intent: Intent) -> Result<(), LifeError> {
        debug!(?intent, "applying intent");
        match intent {
            Intent::Toggle { row, col } => self.toggle_cell(row, col).map(|_| ()),
            Intent::PaintDrag { row, col, alive } => self.set_cell(row, col, alive),
            Intent::Play => {
                self.play();
                Ok(())
            }
            Intent::Stop => {
                self.stop();
                Ok(())
            }
            Intent::Step => {
                self.step();
                Ok(())
            }
            Intent::Clear => {
                self.clear();
                Ok(())
            }
            Intent::SetSpeed { millis } => {
                self.set_speed(millis);
                Ok(())
            }
            Intent::LoadPattern { index } => self.load_pattern(index),
            Intent::Randomize { seed } => {
                self.randomize(seed);
                Ok(())
            }
        }
    }
}
