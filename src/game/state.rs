use std::collections::{HashSet, VecDeque};

use super::{action::Direction, error::GameError, grid::Position};

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, oldest first: the tail sits at the front, the head at the back
    body: VecDeque<Position>,
    /// Current direction of movement
    direction: Direction,
}

impl Snake {
    /// Create a snake from its segments, tail first
    pub fn new(body: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        Self {
            body: body.into_iter().collect(),
            direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Result<Position, GameError> {
        self.body.back().copied().ok_or(GameError::EmptySnake)
    }

    /// Get the tail position (oldest segment)
    pub fn tail(&self) -> Option<Position> {
        self.body.front().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Steer the snake. Requests on the axis it already travels along are
    /// ignored, which rules out reversing into the neck. Returns whether the
    /// direction changed.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.direction.shares_axis(requested) {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Where the head lands if the snake moves one cell
    pub fn next_head(&self) -> Result<Position, GameError> {
        Ok(self.head()?.moved_in_direction(self.direction))
    }

    /// Append a new head
    pub fn grow(&mut self, new_head: Position) {
        self.body.push_back(new_head);
    }

    /// Drop the oldest segment
    pub fn shrink(&mut self) -> Option<Position> {
        self.body.pop_front()
    }

    /// Segments a moving head can collide with. The tail is left out since it
    /// vacates its cell on the same step.
    pub fn body_excluding_tail(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().skip(1).copied()
    }

    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Cells covered by the snake
    pub fn occupied(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    /// Check that no two segments share a cell
    pub fn has_unique_segments(&self) -> bool {
        self.occupied().len() == self.body.len()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// One game from start to finish
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub snake: Snake,
    pub apple: Position,
    pub score: u32,
    /// Set once the game has ended; no further moves are applied
    pub finish: bool,
}

impl GameSession {
    /// Create a new game session
    pub fn new(snake: Snake, apple: Position) -> Self {
        Self {
            snake,
            apple,
            score: 0,
            finish: false,
        }
    }
}
