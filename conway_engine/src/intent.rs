/// Discrete request delivered by a front end to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Toggle { row: usize, col: usize },
    PaintDrag { row: usize, col: usize, alive: bool },
    Play,
    Stop,
    /// Exactly one generation, whatever the run state.
    Step,
    Clear,
    /// Requested tick interval in milliseconds; clamped by the engine.
    SetSpeed { millis: u64 },
    LoadPattern { index: usize },
    Randomize { seed: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}
