// driver.rs - Timer task that steps a shared engine while it is running

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::{Grid, Intent, LifeError, SimulationEngine};

/// Engine handle shared between a front end and the tick task.
///
/// A single mutex guards the grid and the run state together, so a reader
/// never sees a half-applied generation.
#[derive(Clone)]
pub struct SharedEngine {
    engine: Arc<Mutex<SimulationEngine>>,
    wake: Arc<Notify>,
}

impl SharedEngine {
    pub fn new(engine: SimulationEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            wake: Arc::new(Notify::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SimulationEngine> {
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the engine.
    ///
    /// The tick task is woken whenever `f` moves the engine between Stopped
    /// and Running.
    pub fn with<R>(&self, f: impl FnOnce(&mut SimulationEngine) -> R) -> R {
        let mut engine = self.lock();
        let epoch = engine.run_epoch();
        let result = f(&mut engine);
        let changed = engine.run_epoch() != epoch;
        drop(engine);

        if changed {
            self.wake.notify_one();
        }
        result
    }

    pub fn apply(&self, intent: Intent) -> Result<(), LifeError> {
        self.with(|engine| engine.apply(intent))
    }

    /// Copy of the grid for rendering.
    pub fn snapshot(&self) -> Grid {
        self.lock().current_grid().clone()
    }
}

/// Spawns the repeating tick task on the current tokio runtime.
///
/// While stopped the task parks until the engine is played. While running it
/// sleeps one step interval and then re-checks the run state under the lock
/// before stepping, so nothing is applied after a stop. A stop or play during
/// the sleep abandons it, and a new Play starts a full interval from that
/// moment. `on_tick` receives the new generation number after every step.
pub fn spawn_ticker<F>(shared: SharedEngine, on_tick: F) -> JoinHandle<()>
where
    F: Fn(u64) + Send + 'static,
{
    tokio::spawn(run_ticker(shared, on_tick))
}

async fn run_ticker<F>(shared: SharedEngine, on_tick: F)
where
    F: Fn(u64) + Send + 'static,
{
    debug!("ticker started");
    loop {
        let (running, interval, epoch) = shared.with(|engine| {
            (engine.is_running(), engine.step_interval(), engine.run_epoch())
        });
        if !running {
            shared.wake.notified().await;
            continue;
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            // Run state changed mid-sleep; start over from the new state.
            _ = shared.wake.notified() => continue,
        }

        let stepped = shared.with(|engine| {
            (engine.is_running() && engine.run_epoch() == epoch).then(|| {
                engine.step();
                engine.generation()
            })
        });
        if let Some(generation) = stepped {
            on_tick(generation);
        }
    }
}
