use super::grid::{Grid, Position};
use crate::metrics::RunStats;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Snake hit a wall or itself
    GameOver,
    /// Snake filled the whole board
    Win,
    /// An internal invariant broke; the game was abandoned
    Fault,
}

impl Outcome {
    /// Message shown to the player
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::GameOver => "Game Over!",
            Outcome::Win => "You Win!",
            Outcome::Fault => "Something went wrong, please reset",
        }
    }
}

/// Lifecycle of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No game yet, or reset after one
    #[default]
    Idle,
    /// Ticks are flowing
    Running,
    /// Game finished; waiting for a reset
    Ended(Outcome),
}

/// Read-only snapshot handed to the renderer after every state change
#[derive(Debug, Clone, PartialEq)]
pub struct RenderView<'a> {
    pub grid: Grid,
    /// Snake segments, tail first
    pub snake_body: Vec<Position>,
    pub apple: Option<Position>,
    pub score: u32,
    pub phase: Phase,
    pub stats: &'a RunStats,
}

impl RenderView<'_> {
    pub fn head(&self) -> Option<Position> {
        self.snake_body.last().copied()
    }
}

/// Receiver of state snapshots; the only way the engine talks to a display
pub trait RenderSink {
    fn render(&mut self, view: &RenderView<'_>);
}

/// Sink that discards every snapshot
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRender;

impl RenderSink for NoRender {
    fn render(&mut self, _view: &RenderView<'_>) {}
}
