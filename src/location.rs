use crate::board::Board;
use crate::error::JanggiError;
use std::fmt::Formatter;

/// A square on the 10×9 board. Row 0 is the top rank, row 9 the bottom;
/// column 0 is the leftmost file.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Location {
    row: i8,
    col: i8,
}

impl Location {
    pub fn new(row: i8, col: i8) -> Result<Self, JanggiError> {
        if !(0..Board::HEIGHT).contains(&row) || !(0..Board::WIDTH).contains(&col) {
            return Err(JanggiError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= (Board::WIDTH * Board::HEIGHT) as usize {
            return None;
        }
        let row = index as i8 / Board::WIDTH;
        let col = index as i8 % Board::WIDTH;
        Some(Self { row, col })
    }

    /// All squares in row-major order, top-to-bottom then left-to-right.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Board::HEIGHT).flat_map(|row| (0..Board::WIDTH).map(move |col| Self { row, col }))
    }

    /// Steps by the given row/column deltas, or `None` when the result would
    /// leave the board.
    pub fn shift(&self, dr: i8, dc: i8) -> Option<Self> {
        Self::new(self.row + dr, self.col + dc).ok()
    }

    /// The square this one maps to under a 180° rotation of the board.
    pub fn mirrored(&self) -> Self {
        Self {
            row: Board::HEIGHT - 1 - self.row,
            col: Board::WIDTH - 1 - self.col,
        }
    }

    pub fn index(&self) -> usize {
        (self.row * Board::WIDTH + self.col) as usize
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn col(&self) -> i8 {
        self.col
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row)
    }
}
