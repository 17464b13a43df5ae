use std::collections::HashSet;

use rand::{Rng, seq::IteratorRandom};

use super::{
    error::GameError,
    grid::{Grid, Position},
};

/// Pick a uniformly random cell that is not in `occupied`.
///
/// Fails with [`GameError::BoardFull`] when every cell is taken; callers are
/// expected to detect a full board as a win before asking for an apple.
pub fn place_apple<R: Rng + ?Sized>(
    grid: &Grid,
    occupied: &HashSet<Position>,
    rng: &mut R,
) -> Result<Position, GameError> {
    grid.cells()
        .filter(|cell| !occupied.contains(cell))
        .choose(rng)
        .ok_or(GameError::BoardFull)
}
