use super::grid::{Grid, Position};

/// What a candidate head position runs into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Snake left the board
    Wall,
    /// Snake hit itself
    Body,
    /// Snake reached the apple
    Apple,
    /// Free cell
    Empty,
}

/// Classify the cell a head is about to enter.
///
/// `body` must leave out the current tail: the tail vacates its cell on a
/// regular move, so following it is legal. Checks run in order wall, body,
/// apple; placement keeps the apple off the body, so an apple hit never
/// shadows a body hit.
pub fn classify(
    grid: &Grid,
    candidate: Position,
    mut body: impl Iterator<Item = Position>,
    apple: Position,
) -> Collision {
    if !grid.is_in_bounds(candidate) {
        Collision::Wall
    } else if body.any(|segment| segment == candidate) {
        Collision::Body
    } else if candidate == apple {
        Collision::Apple
    } else {
        Collision::Empty
    }
}
