use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    action::Direction,
    grid::{Grid, Position},
};

/// Smallest board the standard layout fits on
pub const MIN_GRID_SIZE: usize = 8;
/// Board size used when none is configured
pub const DEFAULT_GRID_SIZE: usize = 15;
/// Largest board that still renders in an ordinary terminal
pub const MAX_GRID_SIZE: usize = 40;

/// Tick speed presets offered before a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SpeedLevel {
    /// 400ms per step
    Slow,
    /// 250ms per step
    #[default]
    Normal,
    /// 150ms per step
    Fast,
    /// 80ms per step
    VeryFast,
}

impl SpeedLevel {
    /// Milliseconds between two ticks
    pub fn millis(&self) -> u64 {
        match self {
            Self::Slow => 400,
            Self::Normal => 250,
            Self::Fast => 150,
            Self::VeryFast => 80,
        }
    }

    /// Get a string representation of the speed
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
            Self::VeryFast => "Very Fast",
        }
    }
}

/// Reasons a [`GameConfig`] cannot be played
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {0} is outside {min}..={max}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    GridSize(usize),
    #[error("tick interval must be at least 1ms")]
    ZeroSpeed,
    #[error("initial snake has no segments")]
    EmptyBody,
    #[error("initial snake segment ({}, {}) is off the board", .0.x, .0.y)]
    BodyOutOfBounds(Position),
    #[error("initial snake covers ({}, {}) twice", .0.x, .0.y)]
    BodyOverlap(Position),
    #[error("initial snake segments {index} and {} are not adjacent", .index + 1)]
    BodyDisconnected { index: usize },
    #[error("initial snake leaves no room for an apple")]
    BodyFillsBoard,
    #[error("initial direction points back into the snake")]
    DirectionIntoBody,
    #[error("initial apple ({}, {}) is off the board", .0.x, .0.y)]
    AppleOutOfBounds(Position),
    #[error("initial apple ({}, {}) sits on the snake", .0.x, .0.y)]
    AppleOnBody(Position),
}

/// Configuration for the game.
///
/// When deserialised, any starting-layout field left out of the file is taken
/// from [`GameConfig::new`] for the file's `grid_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ConfigFile")]
pub struct GameConfig {
    /// Width and height of the square board
    pub grid_size: usize,
    /// Preset used when no explicit interval is given
    pub speed: SpeedLevel,
    /// Explicit tick interval, overrides `speed`
    pub speed_ms: Option<u64>,
    /// Starting segments, tail first
    pub initial_body: Vec<Position>,
    pub initial_direction: Direction,
    pub initial_apple: Position,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

/// On-disk shape of [`GameConfig`]; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    grid_size: Option<usize>,
    speed: SpeedLevel,
    speed_ms: Option<u64>,
    initial_body: Option<Vec<Position>>,
    initial_direction: Option<Direction>,
    initial_apple: Option<Position>,
}

impl From<ConfigFile> for GameConfig {
    fn from(file: ConfigFile) -> Self {
        let layout = GameConfig::new(file.grid_size.unwrap_or(DEFAULT_GRID_SIZE));

        Self {
            grid_size: layout.grid_size,
            speed: file.speed,
            speed_ms: file.speed_ms,
            initial_body: file.initial_body.unwrap_or(layout.initial_body),
            initial_direction: file.initial_direction.unwrap_or(layout.initial_direction),
            initial_apple: file.initial_apple.unwrap_or(layout.initial_apple),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the standard starting layout for `grid_size`:
    /// a four segment column heading down, apple to its right.
    pub fn new(grid_size: usize) -> Self {
        let size = grid_size as i32;
        let column = (size / 2 + 1).min(size - 1);

        Self {
            grid_size,
            speed: SpeedLevel::default(),
            speed_ms: None,
            initial_body: (2..=5).map(|y| Position::new(column, y)).collect(),
            initial_direction: Direction::Down,
            initial_apple: Position::new(size * 3 / 4, 4),
        }
    }

    /// Load a JSON configuration file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Change the board size, resetting the starting layout to fit it
    pub fn resized(self, grid_size: usize) -> Self {
        Self {
            speed: self.speed,
            speed_ms: self.speed_ms,
            ..Self::new(grid_size)
        }
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }

    /// Milliseconds between ticks
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms.unwrap_or_else(|| self.speed.millis())
    }

    /// Check that the starting layout describes a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.speed_ms == Some(0) {
            return Err(ConfigError::ZeroSpeed);
        }

        let grid = self.grid();
        let Some(&head) = self.initial_body.last() else {
            return Err(ConfigError::EmptyBody);
        };

        let mut seen = HashSet::new();
        for &segment in &self.initial_body {
            if !grid.is_in_bounds(segment) {
                return Err(ConfigError::BodyOutOfBounds(segment));
            }
            if !seen.insert(segment) {
                return Err(ConfigError::BodyOverlap(segment));
            }
        }
        if let Some(index) = self
            .initial_body
            .windows(2)
            .position(|pair| !pair[0].is_adjacent(pair[1]))
        {
            return Err(ConfigError::BodyDisconnected { index });
        }
        if self.initial_body.len() >= grid.area() {
            return Err(ConfigError::BodyFillsBoard);
        }

        let neck = self.initial_body.iter().rev().nth(1);
        if neck == Some(&head.moved_in_direction(self.initial_direction)) {
            return Err(ConfigError::DirectionIntoBody);
        }

        if !grid.is_in_bounds(self.initial_apple) {
            return Err(ConfigError::AppleOutOfBounds(self.initial_apple));
        }
        if seen.contains(&self.initial_apple) {
            return Err(ConfigError::AppleOnBody(self.initial_apple));
        }

        Ok(())
    }
}
