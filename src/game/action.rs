use serde::{Deserialize, Serialize};

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns true if both directions lie on the same axis (equal or opposite)
    pub fn shares_axis(&self, other: Direction) -> bool {
        self.is_horizontal() == other.is_horizontal()
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A single entry of the controller's input queue.
///
/// Timer ticks and key presses are funnelled into this one type and handed to
/// the controller one at a time, so no two handlers ever interleave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Begin a new game ticking every `speed_ms` milliseconds
    Start(u64),
    /// Steer the snake
    Direction(Direction),
    /// One timer period elapsed
    Tick,
    /// Discard the current game and return to idle
    Reset,
}

impl From<Direction> for GameEvent {
    fn from(direction: Direction) -> Self {
        GameEvent::Direction(direction)
    }
}
