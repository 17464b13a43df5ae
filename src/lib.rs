//! Grid Snake - a single-player snake game on a square board
//!
//! This library provides:
//! - Core game logic: grid, snake, apples, collisions and the controller (game module)
//! - Cross-game score totals (metrics module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
