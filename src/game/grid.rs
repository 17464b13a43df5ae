use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// True if the two positions share an edge
    pub fn is_adjacent(&self, other: Position) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// The square playing field. Immutable once a game is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells on the board
    pub fn area(&self) -> usize {
        self.size * self.size
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let size = self.size as i32;
        pos.x >= 0 && pos.x < size && pos.y >= 0 && pos.y < size
    }

    /// Every cell of the board, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_adjacency() {
        let pos = Position::new(3, 3);
        assert!(pos.is_adjacent(Position::new(3, 4)));
        assert!(pos.is_adjacent(Position::new(2, 3)));
        assert!(!pos.is_adjacent(Position::new(4, 4)));
        assert!(!pos.is_adjacent(pos));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(15);

        assert!(grid.is_in_bounds(Position::new(0, 0)));
        assert!(grid.is_in_bounds(Position::new(14, 14)));
        assert!(!grid.is_in_bounds(Position::new(-1, 5)));
        assert!(!grid.is_in_bounds(Position::new(15, 0)));
        assert!(!grid.is_in_bounds(Position::new(0, 15)));
        assert!(!grid.is_in_bounds(Position::new(3, -1)));
    }

    #[test]
    fn test_cells_cover_board() {
        let grid = Grid::new(4);
        let cells: Vec<_> = grid.cells().collect();

        assert_eq!(cells.len(), grid.area());
        assert_eq!(cells[0], Position::new(0, 0));
        assert_eq!(cells[1], Position::new(1, 0));
        assert_eq!(cells[15], Position::new(3, 3));
        assert!(cells.iter().all(|&c| grid.is_in_bounds(c)));
    }
}
