use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Debug)]
pub enum Coordinate {
    X,
    Y,
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::X => write!(f, "x"),
            Coordinate::Y => write!(f, "y"),
        }
    }
}

pub const MIN_BOARD_SIZE: usize = 2;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("board of size {size} is below the minimum of {min}")]
    TooSmall { size: usize, min: usize },
}

#[derive(Error, Debug)]
pub enum PositionError {
    #[error("{0} coordinate {1} exceeds board size {2}")]
    OutOfBounds(Coordinate, usize, usize),
}

/// Square grid of side `size`, coordinates zero-indexed from the top-left.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Board {
    size: usize,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::TooSmall {
                size,
                min: MIN_BOARD_SIZE,
            });
        }
        Ok(Board { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Every cell on the board, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Position(x, y)))
    }

    /// Every cell excluding the outermost border. Empty for boards below 3x3.
    pub fn interior_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        (1..size.saturating_sub(1))
            .flat_map(move |y| (1..size - 1).map(move |x| Position(x, y)))
    }

    /// The cell at `pos` shifted by (dx, dy), or None if that leaves the board.
    pub fn offset(&self, pos: Position, dx: isize, dy: isize) -> Option<Position> {
        let x = pos.x().checked_add_signed(dx)?;
        let y = pos.y().checked_add_signed(dy)?;
        Position::new(self, x, y).ok()
    }
}

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position(usize, usize);

impl Position {
    // Ensure that both coordinates fall within the given board
    pub fn new(board: &Board, x: usize, y: usize) -> Result<Self, PositionError> {
        if x >= board.size() {
            return Err(PositionError::OutOfBounds(Coordinate::X, x, board.size()));
        }
        if y >= board.size() {
            return Err(PositionError::OutOfBounds(Coordinate::Y, y, board.size()));
        }
        Ok(Position(x, y))
    }

    pub fn x(&self) -> usize {
        self.0
    }

    pub fn y(&self) -> usize {
        self.1
    }

    pub fn distance_squared(&self, other: Position) -> u64 {
        let dx = self.0.abs_diff(other.0) as u64;
        let dy = self.1.abs_diff(other.1) as u64;
        dx * dx + dy * dy
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_board() {
        assert!(Board::new(0).is_err());
        assert!(Board::new(1).is_err());
        assert!(Board::new(2).is_ok());
        assert_eq!(Board::new(10).unwrap().size(), 10);
    }

    #[test]
    fn test_construct_position() {
        let board = Board::new(3).unwrap();
        assert!(Position::new(&board, 0, 0).is_ok());
        assert!(Position::new(&board, 2, 2).is_ok());
        assert!(Position::new(&board, 3, 0).is_err());
        assert!(Position::new(&board, 0, 3).is_err());
    }

    #[test]
    fn test_offset() {
        let board = Board::new(3).unwrap();
        let corner = Position::new(&board, 0, 0).unwrap();
        assert_eq!(board.offset(corner, -1, 0), None);
        assert_eq!(board.offset(corner, 0, -1), None);
        assert_eq!(
            board.offset(corner, 1, 1),
            Some(Position::new(&board, 1, 1).unwrap())
        );
        let far_corner = Position::new(&board, 2, 2).unwrap();
        assert_eq!(board.offset(far_corner, 1, 0), None);
        assert_eq!(board.offset(far_corner, 0, 1), None);
    }

    #[test]
    fn test_interior_positions() {
        let board = Board::new(3).unwrap();
        let interior: Vec<Position> = board.interior_positions().collect();
        assert_eq!(interior, vec![Position::new(&board, 1, 1).unwrap()]);

        let board = Board::new(2).unwrap();
        assert_eq!(board.interior_positions().count(), 0);
    }

    #[test]
    fn test_distance_squared() {
        let board = Board::new(10).unwrap();
        let a = Position::new(&board, 1, 1).unwrap();
        let b = Position::new(&board, 5, 5).unwrap();
        assert_eq!(a.distance_squared(b), 32);
        assert_eq!(b.distance_squared(a), 32);
        assert_eq!(a.distance_squared(a), 0);
    }

    #[test]
    fn test_display() {
        let board = Board::new(10).unwrap();
        let pos = Position::new(&board, 2, 3).unwrap();
        assert_eq!(pos.to_string(), "[2,3]");
    }
}
