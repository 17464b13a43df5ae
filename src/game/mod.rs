//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The controller consumes [`GameEvent`]s one at a time and reports every state
//! change to a [`RenderSink`].

pub mod action;
pub mod apple;
pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod state;
pub mod timer;
pub mod view;

// Re-export commonly used types
pub use action::{Direction, GameEvent};
pub use apple::place_apple;
pub use collision::{Collision, classify};
pub use config::{ConfigError, GameConfig, SpeedLevel};
pub use engine::GameController;
pub use error::GameError;
pub use grid::{Grid, Position};
pub use state::{GameSession, Snake};
pub use timer::TickTimer;
pub use view::{NoRender, Outcome, Phase, RenderSink, RenderView};
